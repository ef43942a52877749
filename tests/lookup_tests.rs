//! Contains lookup tests
//!
//! Tests in this module go through the public free functions, so they
//! exercise the shared reference table built on first use.
//!
use nucdata::error::{IdentifierErrorKind, NucDataError};
use nucdata::isoname::Nuclide;
use num_complex::Complex64;

///
/// Helper to check a weight against accepted values
///
/// The rounded mass number is an accepted legacy answer, but only through
/// `mass_number`. The precise value must match the table exactly.
///
fn check_weight(id: i32, precise: f64, rounded: f64) {
    let weight = nucdata::nuc_weight(id).unwrap();
    assert_eq!(precise, weight);

    let nuclide = Nuclide::from_zzaaam(id).unwrap();
    assert_eq!(rounded, nuclide.mass_number() as f64);
    assert_eq!(rounded, weight.round());
}

#[test]
fn test_nuc_weight() {
    check_weight(80160, 15.99491461957, 16.0);
    check_weight(922350, 235.043931368, 235.0);
    check_weight(952421, 242.059550625, 242.0);
}

#[test]
fn test_b_coherent() {
    assert_eq!(
        Complex64::new(-3.7406E-13, 0.0),
        nucdata::b_coherent("H1").unwrap()
    );
    assert_eq!(
        Complex64::new(4.01E-13, -5.62E-15),
        nucdata::b_coherent(491150).unwrap()
    );
}

#[test]
fn test_b_incoherent() {
    assert_eq!(
        Complex64::new(-2.6E-13, 0.0),
        nucdata::b_incoherent("PD105").unwrap()
    );
    assert_eq!(
        Complex64::new(3.14E-12, -1.03E-12),
        nucdata::b_incoherent(621490).unwrap()
    );
}

#[test]
fn test_b() {
    let bc = nucdata::b_coherent(621490).unwrap();
    let bi = nucdata::b_incoherent("SM149").unwrap();
    let expected = (bc.norm().powi(2) + bi.norm().powi(2)).sqrt();
    let b = nucdata::b("SM149").unwrap();
    assert!(
        (b - expected).abs() <= 1e-12 * expected,
        "{} != {}",
        b,
        expected
    );
}

#[test]
fn test_identifier_forms_agree() {
    let pairs = [
        (491150, "IN115"),
        (621490, "Sm-149"),
        (461050, "pd105"),
        (10010, "H1"),
    ];
    for (number, name) in pairs {
        assert_eq!(
            nucdata::nuc_weight(number).unwrap(),
            nucdata::nuc_weight(name).unwrap()
        );
        assert_eq!(
            nucdata::b_coherent(number).unwrap(),
            nucdata::b_coherent(name).unwrap()
        );
        assert_eq!(
            nucdata::b_incoherent(number).unwrap(),
            nucdata::b_incoherent(name).unwrap()
        );
        assert_eq!(nucdata::b(number).unwrap(), nucdata::b(name).unwrap());
    }
}

#[test]
fn test_unknown_isotope() {
    // Tc-99 is a valid nuclide without data
    match nucdata::nuc_weight("Tc99") {
        Err(NucDataError::UnknownIsotope { nuclide, .. }) => {
            assert_eq!(430990, nuclide.zzaaam())
        }
        Err(e) => assert!(false, "Wrong error type {:?}", e),
        Ok(_) => assert!(false, "Lookup did not return an error"),
    }
    match nucdata::b(430990) {
        Err(NucDataError::UnknownIsotope { .. }) => {}
        Err(e) => assert!(false, "Wrong error type {:?}", e),
        Ok(_) => assert!(false, "Lookup did not return an error"),
    }
}

#[test]
fn test_invalid_identifier() {
    let cases: Vec<(nucdata::identifier::NucId, IdentifierErrorKind)> = vec![
        ("H-1-1".into(), IdentifierErrorKind::Pattern),
        ("Zz1".into(), IdentifierErrorKind::UnknownElement),
        ("U-91".into(), IdentifierErrorKind::InvalidMassNumber { a: 91 }),
        (1190010.into(), IdentifierErrorKind::OutOfRange { z: 119 }),
        ((-10010).into(), IdentifierErrorKind::Pattern),
    ];
    for (id, kind) in cases {
        match nucdata::b_coherent(id.clone()) {
            Err(NucDataError::InvalidIdentifier { source }) => assert_eq!(kind, source.kind()),
            Err(e) => assert!(false, "Wrong error type {:?} for {}", e, id),
            Ok(_) => assert!(false, "Lookup of {} did not return an error", id),
        }
    }
}

#[test]
fn test_shared_table_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| nucdata::b("SM149").unwrap()))
        .collect();
    let expected = nucdata::b(621490).unwrap();
    for handle in handles {
        assert_eq!(expected, handle.join().unwrap());
    }
}
