//! Runs in its own process so the shared registry starts untouched.

use lazarus_atlas::{data::dungeons::builtin_catalog, registry};

#[test]
fn first_global_read_seeds_the_catalog() {
    let registry = registry::global();
    assert!(registry.is_initialized());
    assert_eq!(registry.len(), builtin_catalog().len());
    assert_eq!(
        registry.get("fringe_sewers").map(|def| def.name.clone()),
        Some("The Forgotten Sewers".to_string())
    );
}
