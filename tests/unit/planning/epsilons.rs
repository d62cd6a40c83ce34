use super::*;
use serde_json::json;

#[test]
fn accepts_strictly_decreasing_positive_values() {
    let eps = EpsilonList::new(&[0.5, 0.1, 0.01]).unwrap();
    assert_eq!(eps.len(), 3);
    assert_eq!(eps.get(1), Some(0.1));
    assert_eq!(eps.smallest(), 0.01);
    assert_eq!(eps.iter().collect::<Vec<_>>(), vec![0.5, 0.1, 0.01]);
    assert!(EpsilonList::new(&[0.3]).is_ok());
}

#[test]
fn increasing_or_tied_values_are_order_errors() {
    assert!(matches!(
        EpsilonList::new(&[0.5, 0.6]),
        Err(ZoomError::InvalidEpsilonsOrder(_))
    ));
    assert!(matches!(
        EpsilonList::new(&[0.5, 0.5]),
        Err(ZoomError::InvalidEpsilonsOrder(_))
    ));
}

#[test]
fn non_positive_or_non_finite_values_are_order_errors() {
    for bad in [
        vec![0.5, 0.0],
        vec![0.5, -0.1],
        vec![f64::NAN],
        vec![f64::INFINITY, 1.0],
    ] {
        assert!(
            matches!(
                EpsilonList::new(&bad),
                Err(ZoomError::InvalidEpsilonsOrder(_))
            ),
            "{bad:?}"
        );
    }
}

#[test]
fn empty_list_is_a_type_error() {
    assert!(matches!(
        EpsilonList::new(&[]),
        Err(ZoomError::InvalidEpsilonsType(_))
    ));
}

#[test]
fn unordered_json_structures_are_type_errors() {
    for v in [
        json!({"a": 0.5, "b": 0.1}),
        json!(0.5),
        json!("0.5"),
        json!(null),
        json!([0.5, "0.1"]),
    ] {
        assert!(
            matches!(
                EpsilonList::from_value(&v),
                Err(ZoomError::InvalidEpsilonsType(_))
            ),
            "{v}"
        );
    }
}

#[test]
fn json_array_goes_through_order_checks() {
    assert!(EpsilonList::from_value(&json!([0.5, 0.1])).is_ok());
    assert!(matches!(
        EpsilonList::from_value(&json!([0.5, 0.6])),
        Err(ZoomError::InvalidEpsilonsOrder(_))
    ));
}

#[test]
fn from_str_and_serde_share_validation() {
    let eps: EpsilonList = "[0.25, 0.05]".parse().unwrap();
    assert_eq!(eps.as_slice(), &[0.25, 0.05]);
    assert!(matches!(
        "{\"x\": 1}".parse::<EpsilonList>(),
        Err(ZoomError::InvalidEpsilonsType(_))
    ));
    assert!(serde_json::from_str::<EpsilonList>("[0.1, 0.2]").is_err());
    assert_eq!(serde_json::to_string(&eps).unwrap(), "[0.25,0.05]");
}
