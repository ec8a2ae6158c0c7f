use serde::Deserialize;

use crate::error::ApiError;

/// Query string of `GET /api/hoteis`, exactly as the client sends it.
#[derive(Debug, Default, Deserialize)]
pub struct HotelSearchParams {
    pub cidade: Option<String>,
    pub estado: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
}

/// Validated search filters. `None` means no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub city: Option<String>,
    pub state: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl TryFrom<HotelSearchParams> for SearchCriteria {
    type Error = ApiError;

    fn try_from(params: HotelSearchParams) -> Result<Self, Self::Error> {
        Ok(Self {
            city: non_empty(params.cidade),
            state: non_empty(params.estado),
            min_price: parse_price("minPrice", params.min_price)?,
            max_price: parse_price("maxPrice", params.max_price)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_price(param: &'static str, raw: Option<String>) -> Result<Option<f64>, ApiError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(Some(price)),
        _ => Err(ApiError::InvalidPrice { param, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(min: Option<&str>, max: Option<&str>) -> HotelSearchParams {
        HotelSearchParams {
            min_price: min.map(str::to_string),
            max_price: max.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_absent() {
        let criteria = SearchCriteria::try_from(HotelSearchParams::default()).unwrap();
        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn test_empty_values_are_absent() {
        let criteria = SearchCriteria::try_from(HotelSearchParams {
            cidade: Some(String::new()),
            estado: Some(String::new()),
            min_price: Some("  ".to_string()),
            max_price: Some(String::new()),
        })
        .unwrap();
        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn test_text_kept_verbatim() {
        let criteria = SearchCriteria::try_from(HotelSearchParams {
            cidade: Some("São Paulo".to_string()),
            estado: Some("sp".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(criteria.city.as_deref(), Some("São Paulo"));
        assert_eq!(criteria.state.as_deref(), Some("sp"));
    }

    #[test]
    fn test_prices_parsed() {
        let criteria = SearchCriteria::try_from(params(Some("100"), Some(" 300.50 "))).unwrap();
        assert_eq!(criteria.min_price, Some(100.0));
        assert_eq!(criteria.max_price, Some(300.5));
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let err = SearchCriteria::try_from(params(Some("abc"), None)).unwrap_err();
        match err {
            ApiError::InvalidPrice { param, value } => {
                assert_eq!(param, "minPrice");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_injection_in_price_rejected() {
        let err = SearchCriteria::try_from(params(
            Some("100 OR 1=1; DROP TABLE users; --"),
            None,
        ))
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidPrice { param: "minPrice", .. }));
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        let err = SearchCriteria::try_from(params(None, Some("150abc"))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidPrice { param: "maxPrice", .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        for raw in ["NaN", "inf", "-infinity"] {
            let err = SearchCriteria::try_from(params(None, Some(raw))).unwrap_err();
            assert!(
                matches!(err, ApiError::InvalidPrice { param: "maxPrice", .. }),
                "{raw} should be rejected"
            );
        }
    }
}
