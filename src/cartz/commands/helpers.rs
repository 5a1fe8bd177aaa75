use crate::model::List;

/// Linear scan for the first list with the given id.
///
/// First match wins: if duplicate ids ever exist, later entries are
/// unreachable by id-based operations.
pub fn find_list_index(lists: &[List], id: u32) -> Option<usize> {
    lists.iter().position(|list| list.id == id)
}

/// Linear scan of a list's products by exact, case-sensitive name.
pub fn find_product_index(list: &List, name: &str) -> Option<usize> {
    list.products.iter().position(|product| product.name == name)
}
