//! `name,efficiency` record codec
//!
//! No header, no quoting, no escaping. Names cannot contain commas.

use fuelcost_domain::model::Vehicle;
use fuelcost_types::CatalogError;

/// Parse one record line into a vehicle
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_record(line: &str, line_number: usize) -> Result<Vehicle, CatalogError> {
    let malformed = |reason: String| CatalogError::MalformedRecord {
        line: line_number,
        content: line.to_string(),
        reason,
    };

    let (name, efficiency) = line
        .split_once(',')
        .ok_or_else(|| malformed("expected `name,efficiency`".to_string()))?;

    let efficiency: f64 = efficiency
        .trim()
        .parse()
        .map_err(|_| malformed(format!("efficiency is not a number: {:?}", efficiency.trim())))?;

    Vehicle::new(name, efficiency).map_err(|e| malformed(e.to_string()))
}

/// Parse a whole store, separating valid vehicles from malformed lines
///
/// Blank lines are ignored.
pub fn parse_records(content: &str) -> (Vec<Vehicle>, Vec<CatalogError>) {
    let mut vehicles = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(line, index + 1) {
            Ok(vehicle) => vehicles.push(vehicle),
            Err(e) => errors.push(e),
        }
    }

    (vehicles, errors)
}

pub fn format_record(vehicle: &Vehicle) -> String {
    format!("{},{}\n", vehicle.name(), vehicle.efficiency())
}

/// Serialize vehicles in order, one newline-terminated record each
pub fn serialize_records(vehicles: &[Vehicle]) -> String {
    vehicles.iter().map(format_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let vehicle = parse_record("aston martin,10.5", 1).unwrap();
        assert_eq!(vehicle.name(), "aston martin");
        assert!((vehicle.efficiency() - 10.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_record_tolerates_carriage_return() {
        let vehicle = parse_record("bmw,11\r", 1).unwrap();
        assert_eq!(vehicle.name(), "bmw");
        assert!((vehicle.efficiency() - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_record_missing_comma() {
        let err = parse_record("lotus", 4).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { line: 4, .. }));
    }

    #[test]
    fn test_parse_record_bad_number() {
        assert!(parse_record("lotus,fast", 1).is_err());
        assert!(parse_record("lotus,4,5", 1).is_err());
        assert!(parse_record("lotus,", 1).is_err());
    }

    #[test]
    fn test_parse_record_never_defaults_efficiency() {
        assert!(parse_record("lotus,0", 1).is_err());
        assert!(parse_record("lotus,-4", 1).is_err());
        assert!(parse_record(",4", 1).is_err());
    }

    #[test]
    fn test_parse_records_skips_blank_and_reports_bad() {
        let content = "porsche,1\n\nbroken line\nbmw,11\n";
        let (vehicles, errors) = parse_records(content);
        assert_eq!(vehicles.len(), 2);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], CatalogError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_serialize_records() {
        let vehicles = vec![
            Vehicle::new("porsche", 1.0).unwrap(),
            Vehicle::new("land rover", 11.1).unwrap(),
        ];
        assert_eq!(serialize_records(&vehicles), "porsche,1\nland rover,11.1\n");
        assert_eq!(serialize_records(&[]), "");
    }
}
