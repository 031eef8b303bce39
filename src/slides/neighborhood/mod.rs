use anyhow::Result;
use futures::future::try_join_all;
use std::collections::BTreeSet;

use crate::slides::loader::ItemLoader;


/// Positions within `radius` of `index`, wrapping around both ends.
pub fn neighbor_indices(index: usize, radius: usize, len: usize) -> BTreeSet<usize> {
    let mut indices = BTreeSet::new();
    if len == 0 {
        return indices;
    }

    let radius = radius.min(len) as i64;
    let center = index as i64;
    let len_signed = len as i64;
    for i in (center - radius)..=(center + radius) {
        indices.insert(i.rem_euclid(len_signed) as usize);
        if indices.len() == len {
            break;
        }
    }
    indices
}

/// Runs the loader over every slide in `indices` concurrently.
///
/// Nothing is returned unless every load succeeds, so callers can commit the
/// whole batch at once.
pub async fn load_neighborhood<T, L>(
    slides: &[T],
    indices: &BTreeSet<usize>,
    loader: &L,
) -> Result<Vec<(usize, T)>>
where
    T: Clone + 'static,
    L: ItemLoader<T>,
{
    let loads = indices
        .iter()
        .filter_map(|&index| slides.get(index).map(|item| (index, item.clone())))
        .map(|(index, item)| async move {
            loader.load(item).await.map(|loaded| (index, loaded))
        });
    try_join_all(loads).await
}
