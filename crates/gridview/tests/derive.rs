//! Tests for `#[derive(Identifiable)]`.

use gridview::{GridView, Identifiable, LayoutContext};

#[derive(Identifiable)]
struct Photo {
    #[id]
    key: u64,
    title: String,
}

#[derive(Identifiable)]
struct Tag {
    id: String,
}

#[derive(Identifiable)]
struct Slot(usize);

#[derive(Identifiable)]
struct Tile<T> {
    #[id]
    name: &'static str,
    payload: T,
}

#[test]
fn test_marked_field_is_identity() {
    let photo = Photo {
        key: 7,
        title: "sunset".to_string(),
    };
    assert_eq!(photo.id(), 7);
    assert_eq!(photo.title, "sunset");
}

#[test]
fn test_field_named_id_is_identity() {
    let tag = Tag {
        id: "rust".to_string(),
    };
    assert_eq!(tag.id(), "rust");
}

#[test]
fn test_newtype_wraps_identity() {
    assert_eq!(Slot(3).id(), 3);
}

#[test]
fn test_generic_struct_derives() {
    let tile = Tile {
        name: "a",
        payload: vec![1, 2, 3],
    };
    assert_eq!(tile.id(), "a");
    assert_eq!(tile.payload.len(), 3);
}

#[test]
fn test_derived_ids_key_grid_cells() {
    let photos = (0..4).map(|key| Photo {
        key: key * 10,
        title: format!("photo {key}"),
    });
    let grid = GridView::new(photos, 2, |p: &Photo| p.title.clone());
    let view = grid.compose(&LayoutContext::portrait(390.0, 844.0));

    let ids: Vec<u64> = view.cells().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![0, 10, 20, 30]);
    assert_eq!(grid.index_of(&20), Some(2));
}
