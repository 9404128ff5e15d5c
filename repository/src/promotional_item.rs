use model::item::{PromotionalItem, PROMOTIONAL_CATEGORY};
use model::limit::Limit;

const CATALOG: [(&str, &str); 5] = [
    ("0001", "サンプル品1"),
    ("0002", "サンプル品2"),
    ("0003", "サンプル品3"),
    ("0004", "サンプル品4"),
    ("0005", "サンプル品5"),
];

pub struct PromotionalItemRepository {
    items: Vec<PromotionalItem>,
}

impl PromotionalItemRepository {
    pub fn new(items: Vec<PromotionalItem>) -> PromotionalItemRepository {
        PromotionalItemRepository { items }
    }

    /// Repository over the fixed five-item catalog.
    pub fn with_static_catalog() -> PromotionalItemRepository {
        PromotionalItemRepository::new(
            CATALOG
                .iter()
                .map(|(id, name)| PromotionalItem::new(id, name, PROMOTIONAL_CATEGORY))
                .collect(),
        )
    }

    /// Returns every item in catalog order. `limit` is recorded but does not truncate.
    pub fn list(&self, limit: &Limit) -> Vec<PromotionalItem> {
        tracing::debug!("Listing promotional items with limit {}", limit);
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(raw: &str) -> Limit {
        Limit::from_query(raw)
    }

    #[test]
    fn static_catalog_has_five_items_in_order() {
        let items = PromotionalItemRepository::with_static_catalog().list(&limit("5"));

        let ids: Vec<&str> = items.iter().map(|item| item.item_id.as_str()).collect();
        assert_eq!(ids, vec!["0001", "0002", "0003", "0004", "0005"]);
        assert_eq!(items[2].item_name, "サンプル品3");
        assert!(items.iter().all(|item| item.category == "販促物"));
    }

    #[test]
    fn limit_does_not_truncate() {
        let repository = PromotionalItemRepository::with_static_catalog();

        for raw in ["0", "2", "5000000000", "-1", "abc", ""] {
            assert_eq!(repository.list(&limit(raw)).len(), 5);
        }
    }

    #[test]
    fn custom_items_are_returned_as_given() {
        let repository =
            PromotionalItemRepository::new(vec![PromotionalItem::new("x", "名前", "その他")]);

        assert_eq!(
            repository.list(&limit("1")),
            vec![PromotionalItem::new("x", "名前", "その他")]
        );
    }
}
