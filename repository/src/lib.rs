pub mod promotional_item;
