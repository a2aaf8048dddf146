use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FocusArea {
    Slideshow,
    Grid,
}

/// A product as served by `/product/get-product`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "non_negative_price")]
    pub price: f64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub description: String,
}

fn non_negative_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = f64::deserialize(deserializer)?;
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(serde::de::Error::custom(format!("invalid price {price}")))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

impl LoadState {
    /// Only `Loading` may move on, and only once.
    pub fn can_transition_to(self, next: LoadState) -> bool {
        matches!(
            (self, next),
            (LoadState::Loading, LoadState::Ready) | (LoadState::Loading, LoadState::Failed)
        )
    }
}

/// The product picked for the detail popup. Independent of the slideshow cursor.
#[derive(Default, Debug)]
pub struct Selection {
    product: Option<Product>,
}

impl Selection {
    pub fn select(&mut self, product: Product) {
        self.product = Some(product);
    }

    pub fn clear(&mut self) {
        self.product = None;
    }

    pub fn get(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.product.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_field_names() {
        let json = r#"[{"_id":"1","name":"Shirt","price":500,"imageUrl":"u1","description":"d1","extra":true}]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "1");
        assert_eq!(products[0].image_url, "u1");
        assert_eq!(products[0].price, 500.0);
    }

    #[test]
    fn rejects_negative_price() {
        let json = r#"{"_id":"1","name":"Shirt","price":-1,"imageUrl":"u1","description":"d1"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        let json = r#"{"_id":"1","name":"Shirt"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn load_state_only_leaves_loading() {
        use LoadState::*;
        assert!(Loading.can_transition_to(Ready));
        assert!(Loading.can_transition_to(Failed));
        for from in [Ready, Failed] {
            for to in [Loading, Ready, Failed] {
                assert!(!from.can_transition_to(to));
            }
        }
    }

    #[test]
    fn select_then_clear_closes_detail() {
        let mut selection = Selection::default();
        selection.select(Product {
            id: "x".into(),
            name: "X".into(),
            price: 1.0,
            image_url: "ux".into(),
            description: "dx".into(),
        });
        assert!(selection.is_open());
        selection.clear();
        assert!(!selection.is_open());
        assert!(selection.get().is_none());
    }
}
