use super::*;
use crate::model::DimensionKind;

fn wiki_cube() -> DataCube {
    DataCube::new(
        vec![
            Dimension::new("country", DimensionKind::String),
            Dimension::new("time", DimensionKind::Time),
        ],
        vec![Measure::new("count").with_title("Count"), Measure::new("added")],
    )
}

#[test]
fn get_dimension_finds_by_name() {
    let cube = wiki_cube();
    assert_eq!(cube.get_dimension("time").map(|d| d.kind), Some(DimensionKind::Time));
    assert!(cube.get_dimension("browser").is_none());
}

#[test]
fn get_measure_finds_by_name() {
    let cube = wiki_cube();
    assert_eq!(cube.get_measure("count").map(Measure::display_title), Some("Count"));
    assert_eq!(cube.get_measure("added").map(Measure::display_title), Some("added"));
    assert!(cube.get_measure("deleted").is_none());
}

#[test]
fn empty_cube_deserializes_from_empty_object() {
    let cube: DataCube = serde_json::from_str("{}").unwrap();
    assert_eq!(cube, DataCube::default());
}
