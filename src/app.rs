use std::sync::Arc;

use clap::ValueEnum;
use tokio::runtime::Handle;
use tracing::info;

use crate::home::HomePage;
use crate::network::ProductSource;

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Route {
    Home,
    Login,
    Register,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
        }
    }
}

pub struct App<S> {
    route: Route,
    home: Option<HomePage>,
    source: Arc<S>,
    handle: Handle,
    pub currency_symbol: String,
    pub status: Option<String>,
}

impl<S: ProductSource> App<S> {
    pub fn new(route: Route, source: Arc<S>, handle: Handle, currency_symbol: String) -> Self {
        let mut app = Self {
            route,
            home: None,
            source,
            handle,
            currency_symbol,
            status: None,
        };
        if route == Route::Home {
            app.mount_home();
        }
        app
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn home(&self) -> Option<&HomePage> {
        self.home.as_ref()
    }

    pub fn home_mut(&mut self) -> Option<&mut HomePage> {
        self.home.as_mut()
    }

    /// Switches route. Leaving home unmounts it; coming back mounts a fresh page.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        info!(from = self.route.path(), to = route.path(), "navigate");
        if let Some(mut home) = self.home.take() {
            home.deactivate();
        }
        self.route = route;
        self.status = None;
        if route == Route::Home {
            self.mount_home();
        }
    }

    pub fn tick(&mut self) {
        if let Some(home) = self.home.as_mut() {
            home.tick();
        }
    }

    pub fn shutdown(&mut self) {
        if let Some(home) = self.home.as_mut() {
            home.deactivate();
        }
    }

    fn mount_home(&mut self) {
        let mut home = HomePage::new();
        home.activate(&self.handle, Arc::clone(&self.source));
        self.home = Some(home);
    }
}
