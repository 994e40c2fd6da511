use std::rc::Rc;

use category_constructions::prelude::*;
use num_rational::Rational64;

fn q(n: i64, d: i64) -> Rational64 {
    Rational64::new(n, d)
}

#[test]
fn subalgebra_repr() {
    let l = AbelianLieAlgebra::example(QQ).unwrap();
    let basis = l.basis();
    let (a, b, c) = (&basis[&0], &basis[&1], &basis[&2]);
    let s = l
        .subalgebra(&[(&(2 * a).unwrap() + b).unwrap(), (b + c).unwrap()])
        .unwrap();
    assert_eq!(
        s.to_string(),
        "An example of a finite dimensional Lie algebra with basis: \
         the 2-dimensional abelian Lie algebra over Rational Field with basis matrix:\n\
         [   1    0 -1/2]\n[   0    1    1]"
    );
    assert_eq!(
        s.free_module().to_string(),
        "Vector space of degree 3 and dimension 2 over Rational Field\n\
         Basis matrix:\n[   1    0 -1/2]\n[   0    1    1]"
    );
    assert!(Rc::ptr_eq(&s.ambient(), &l));
    assert_eq!(s.n(), 2);
}

#[test]
fn subalgebra_is_a_subobject() {
    let l = AbelianLieAlgebra::example(QQ).unwrap();
    let basis = l.basis();
    let s = l.subalgebra(&[basis[&0].clone()]).unwrap();
    let subobjects = l.category().subobjects().unwrap();
    assert_eq!(s.category(), subobjects);
    assert!(s.is_in(&l.category()));
    assert!(s.is_in(&Category::sets().subobjects().unwrap()));
}

#[test]
fn subalgebra_elements_live_in_the_ambient() {
    let l = AbelianLieAlgebra::example(QQ).unwrap();
    let basis = l.basis();
    let (a, b, c) = (&basis[&0], &basis[&1], &basis[&2]);
    let x_gen = (a + b).unwrap();
    let y_gen = (&(2 * a).unwrap() + c).unwrap();
    let sub = l.subalgebra(&[x_gen, y_gen]).unwrap();

    let sub_basis = sub.basis();
    let (x, y) = (&sub_basis[&0], &sub_basis[&1]);
    assert_eq!(x.to_vector(), [q(1, 1), q(0, 1), q(1, 2)]);
    assert_eq!(y.to_vector(), [q(0, 1), q(1, 1), q(-1, 2)]);

    assert_eq!(l.coerce(x).unwrap().to_string(), "(1, 0, 1/2)");
    let sum = (x + y).unwrap();
    assert!(Rc::ptr_eq(sum.parent(), &sub));
    assert_eq!(l.coerce(&sum).unwrap().to_string(), "(1, 1, 0)");

    // mixing with the ambient lands in the ambient
    let mixed = (x + c).unwrap();
    assert!(Rc::ptr_eq(mixed.parent(), &l));

    assert!(sub.coerce(c).is_err());
}

#[test]
fn subalgebras_are_uniquely_represented() {
    let l = AbelianLieAlgebra::example(QQ).unwrap();
    let basis = l.basis();
    let (a, b) = (&basis[&0], &basis[&1]);
    let s1 = l.subalgebra(&[a.clone(), b.clone()]).unwrap();
    let s2 = l.subalgebra(&[(a + b).unwrap(), (a - b).unwrap()]).unwrap();
    assert!(Rc::ptr_eq(&s1, &s2));

    // a subalgebra of a subalgebra has the same ambient
    let t = s1.subalgebra(&[a.clone()]).unwrap();
    assert!(Rc::ptr_eq(&t.ambient(), &l));
    assert!(Rc::ptr_eq(&t, &l.subalgebra(&[a.clone()]).unwrap()));
}

#[test]
fn subalgebras_need_a_field() {
    let z = AbelianLieAlgebra::new(ZZ, Some(2), None, None).unwrap();
    let basis = z.basis();
    assert_eq!(
        z.subalgebra(&[basis[&0].clone()]).unwrap_err(),
        CategoryError::NotAField { ring: ZZ }
    );
}

#[test]
fn subalgebras_with_huge_coefficients_report_overflow() {
    let l = AbelianLieAlgebra::example(QQ).unwrap();
    let gens = [
        l.element(&[q(i64::MAX, 1), q(3, 1), q(0, 1)]).unwrap(),
        l.element(&[q(2, 1), q(i64::MAX, 1), q(1, 1)]).unwrap(),
    ];
    assert!(matches!(
        l.subalgebra(&gens),
        Err(CategoryError::Overflow { .. })
    ));
}
