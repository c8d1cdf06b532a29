//! Shopping album operations
//!
//! Each operation takes the current album list and returns the replacement.
//! `None` means nothing changed.

use crate::models::{new_id, ShoppingAlbum, ShoppingItem};

pub fn find_album<'a>(albums: &'a [ShoppingAlbum], id: &str) -> Option<&'a ShoppingAlbum> {
    albums.iter().find(|a| a.id == id)
}

pub fn add_album(albums: &[ShoppingAlbum], name: &str) -> Option<Vec<ShoppingAlbum>> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let mut next = albums.to_vec();
    next.push(ShoppingAlbum {
        id: new_id("album"),
        name: name.to_string(),
        items: Vec::new(),
    });
    Some(next)
}

pub fn remove_album(albums: &[ShoppingAlbum], album_id: &str) -> Option<Vec<ShoppingAlbum>> {
    find_album(albums, album_id)?;
    Some(albums.iter().filter(|a| a.id != album_id).cloned().collect())
}

/// Apply `f` to one album's items
fn with_items<F>(albums: &[ShoppingAlbum], album_id: &str, f: F) -> Option<Vec<ShoppingAlbum>>
where
    F: FnOnce(&mut Vec<ShoppingItem>) -> bool,
{
    let mut next = albums.to_vec();
    let album = next.iter_mut().find(|a| a.id == album_id)?;
    f(&mut album.items).then_some(next)
}

pub fn add_item(
    albums: &[ShoppingAlbum],
    album_id: &str,
    name: &str,
    image_url: Option<String>,
) -> Option<Vec<ShoppingAlbum>> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    with_items(albums, album_id, |items| {
        items.push(ShoppingItem {
            id: new_id("item"),
            name: name.to_string(),
            image_url: image_url.filter(|url| !url.is_empty()),
            checked: false,
        });
        true
    })
}

pub fn toggle_item(albums: &[ShoppingAlbum], album_id: &str, item_id: &str) -> Option<Vec<ShoppingAlbum>> {
    with_items(albums, album_id, |items| match items.iter_mut().find(|i| i.id == item_id) {
        Some(item) => {
            item.checked = !item.checked;
            true
        }
        None => false,
    })
}

pub fn remove_item(albums: &[ShoppingAlbum], album_id: &str, item_id: &str) -> Option<Vec<ShoppingAlbum>> {
    with_items(albums, album_id, |items| {
        let before = items.len();
        items.retain(|i| i.id != item_id);
        items.len() != before
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn albums() -> Vec<ShoppingAlbum> {
        vec![
            ShoppingAlbum {
                id: "album-1".to_string(),
                name: "Muji".to_string(),
                items: vec![ShoppingItem {
                    id: "item-1".to_string(),
                    name: "Curry".to_string(),
                    image_url: None,
                    checked: false,
                }],
            },
            ShoppingAlbum {
                id: "album-2".to_string(),
                name: "Daiso".to_string(),
                items: vec![],
            },
        ]
    }

    #[test]
    fn test_add_album() {
        let next = add_album(&albums(), " 3COINS ").unwrap();
        assert_eq!(next.len(), 3);
        assert_eq!(next[2].name, "3COINS");
        assert!(next[2].id.starts_with("album-"));
        assert!(add_album(&next, "  ").is_none());
    }

    #[test]
    fn test_remove_album() {
        let next = remove_album(&albums(), "album-1").unwrap();
        assert_eq!(next.len(), 1);
        assert!(remove_album(&next, "album-1").is_none());
    }

    #[test]
    fn test_add_item_to_album() {
        let original = albums();
        let next = add_item(&original, "album-2", "Pen", Some("data:image/jpeg;base64,AA".to_string())).unwrap();
        let album = find_album(&next, "album-2").unwrap();
        assert_eq!(album.items.len(), 1);
        assert!(album.items[0].id.starts_with("item-"));
        assert!(album.items[0].image_url.is_some());
        assert_eq!(find_album(&next, "album-1"), find_album(&original, "album-1"));
    }

    #[test]
    fn test_add_item_without_image_or_name() {
        let next = add_item(&albums(), "album-2", "Pen", Some(String::new())).unwrap();
        assert_eq!(find_album(&next, "album-2").unwrap().items[0].image_url, None);
        assert!(add_item(&albums(), "album-2", " ", None).is_none());
        assert!(add_item(&albums(), "missing", "Pen", None).is_none());
    }

    #[test]
    fn test_toggle_and_remove_item() {
        let toggled = toggle_item(&albums(), "album-1", "item-1").unwrap();
        assert!(toggled[0].items[0].checked);
        assert!(toggle_item(&toggled, "album-1", "nope").is_none());

        let removed = remove_item(&toggled, "album-1", "item-1").unwrap();
        assert!(removed[0].items.is_empty());
        assert!(remove_item(&removed, "album-1", "item-1").is_none());
    }
}
