use category_constructions::prelude::*;

#[test]
fn named_category_repr() {
    assert_eq!(Category::monoids().to_string(), "Category of monoids");
    assert_eq!(
        Category::modules(QQ).to_string(),
        "Category of vector spaces over Rational Field"
    );
    assert_eq!(
        Category::modules_with_basis(ZZ).to_string(),
        "Category of modules with basis over Integer Ring"
    );
    assert_eq!(
        Category::lie_algebras(QQ)
            .finite_dimensional()
            .and_then(|c| c.with_basis())
            .unwrap()
            .to_string(),
        "Category of finite dimensional lie algebras with basis over Rational Field"
    );
    assert_ne!(Category::modules(QQ), Category::modules(ZZ));
}

#[test]
fn construction_category_repr() {
    let c = Category::finite_enumerated_sets().cartesian_products().unwrap();
    assert_eq!(
        c.to_string(),
        "Category of Cartesian products of finite enumerated sets"
    );
    assert_eq!(
        Category::sets().cartesian_products().unwrap().latex(),
        "\\mathbf{CartesianProducts}(\\mathbf{Sets})"
    );
    assert_eq!(
        Category::modules(QQ).duals().unwrap().to_string(),
        "Category of duals of vector spaces over Rational Field"
    );
}

#[test]
fn intersection_repr() {
    let m = meet(&[Category::monoids(), Category::finite_enumerated_sets()]);
    let repr = m.to_string();
    assert!(repr.starts_with("Join of Category of "));
    assert!(repr.contains("Category of monoids"));
    assert!(repr.contains("Category of finite enumerated sets"));
}

#[test]
fn latex_of_parameterized_category() {
    assert_eq!(Category::modules(QQ).latex(), "\\mathbf{Modules}_{\\Bold{Q}}");
}
