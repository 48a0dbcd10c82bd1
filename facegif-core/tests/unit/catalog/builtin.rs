use super::*;

#[test]
fn builtin_loads_and_has_advertised_combinations() {
    let catalog = ComponentCatalog::builtin().unwrap();
    assert_eq!(catalog.category_sizes(), vec![6, 4, 4, 6, 5, 5]);
    assert_eq!(catalog.combination_count(), BUILTIN_COMBINATIONS);
    assert_eq!(catalog.combination_count(), 14_400);
}

#[test]
fn builtin_canvas_and_z_order() {
    let catalog = ComponentCatalog::builtin().unwrap();
    assert_eq!(
        catalog.canvas(),
        Canvas {
            width: 400,
            height: 480
        }
    );
    let names: Vec<_> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["skin", "shape", "brows", "eyes", "mouth", "accessory"]);
    assert_eq!(catalog.categories()[0].kind, CategoryKind::Paint);
    assert!(
        catalog.categories()[1..]
            .iter()
            .all(|c| c.kind == CategoryKind::Layer)
    );
}

#[test]
fn builtin_is_stable_across_constructions() {
    assert_eq!(
        ComponentCatalog::builtin().unwrap(),
        ComponentCatalog::builtin().unwrap()
    );
}
