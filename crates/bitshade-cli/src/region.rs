//! Parsing of `x,y,width,height` crop arguments.

use bitshade_core::CropRegion;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionParseError {
    #[error("crop region must have four fields x,y,width,height (got {0})")]
    FieldCount(usize),

    #[error("crop region field `{field}` is not a non-negative integer: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

const FIELDS: [&str; 4] = ["x", "y", "width", "height"];

/// Parse `"x,y,w,h"` into a [`CropRegion`].
///
/// Only the syntax is checked here; bounds are checked by the crop itself.
pub fn parse_region(text: &str) -> Result<CropRegion, RegionParseError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != FIELDS.len() {
        return Err(RegionParseError::FieldCount(parts.len()));
    }

    let mut values = [0u32; 4];
    for ((slot, part), field) in values.iter_mut().zip(&parts).zip(FIELDS) {
        *slot = part
            .parse::<u32>()
            .map_err(|_| RegionParseError::InvalidField {
                field,
                value: (*part).to_string(),
            })?;
    }

    let [x, y, width, height] = values;
    Ok(CropRegion::new(x, y, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region_accepts_four_integers() {
        assert_eq!(parse_region("1,2,3,4").unwrap(), CropRegion::new(1, 2, 3, 4));
        assert_eq!(
            parse_region(" 0, 0 ,640,480 ").unwrap(),
            CropRegion::new(0, 0, 640, 480)
        );
    }

    #[test]
    fn test_parse_region_rejects_wrong_field_count() {
        assert_eq!(parse_region("1,2,3"), Err(RegionParseError::FieldCount(3)));
        assert_eq!(parse_region("1,2,3,4,5"), Err(RegionParseError::FieldCount(5)));
    }

    #[test]
    fn test_parse_region_rejects_negative_and_text() {
        assert_eq!(
            parse_region("-1,0,2,2"),
            Err(RegionParseError::InvalidField {
                field: "x",
                value: "-1".to_string(),
            })
        );
        assert!(matches!(
            parse_region("0,0,wide,2"),
            Err(RegionParseError::InvalidField { field: "width", .. })
        ));
        assert!(matches!(
            parse_region("0,0,2,"),
            Err(RegionParseError::InvalidField { field: "height", .. })
        ));
    }

    #[test]
    fn test_parse_region_allows_zero_size_for_crop_to_reject() {
        // Empty regions parse; `crop` reports them.
        assert_eq!(parse_region("0,0,0,5").unwrap(), CropRegion::new(0, 0, 0, 5));
    }
}
