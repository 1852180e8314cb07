use treap_bimap::{BiMap, Compare};

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Pairs in left order, cloned out of the map.
#[allow(dead_code)]
pub fn pairs<L: Clone, R: Clone, CL, CR>(map: &BiMap<L, R, CL, CR>) -> Vec<(L, R)> {
    map.iter_left().map(|(l, r)| (l.clone(), r.clone())).collect()
}

/// Asserts the treaps are well formed and each side sees every record.
#[allow(dead_code)]
pub fn assert_consistent<L, R, CL, CR>(map: &BiMap<L, R, CL, CR>)
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    assert_eq!(map.validate(), Ok(map.len()));
    assert_eq!(map.iter_left().count(), map.len());
    assert_eq!(map.iter_right().count(), map.len());
}
