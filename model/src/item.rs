use serde::{Deserialize, Serialize};

/// Category shared by every item in the static catalog.
pub const PROMOTIONAL_CATEGORY: &str = "販促物";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PromotionalItem {
    pub item_id: String,
    pub item_name: String,
    pub category: String,
}

impl PromotionalItem {
    pub fn new(item_id: &str, item_name: &str, category: &str) -> PromotionalItem {
        PromotionalItem {
            item_id: item_id.to_owned(),
            item_name: item_name.to_owned(),
            category: category.to_owned(),
        }
    }
}

#[test]
fn serializes_with_snake_case_fields() {
    let item = PromotionalItem::new("0001", "サンプル品1", PROMOTIONAL_CATEGORY);
    let value = serde_json::to_value(&item).unwrap();

    assert_eq!(value["item_id"], "0001");
    assert_eq!(value["item_name"], "サンプル品1");
    assert_eq!(value["category"], "販促物");
    assert_eq!(value.as_object().unwrap().len(), 3);
}
