use serde::{Deserialize, Serialize};

/// Query parameters that shape the lover list page.
///
/// This is a flat snapshot owned by the page that renders the list; filter
/// operations receive it by reference and hand back a new value. The wire
/// names (`_sort`, `_order`, `_page`) are kept as-is so query strings stay
/// compatible with the original transport.
///
/// `_order` only means something while `_sort` is set; that invariant is
/// not enforced here.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListParams {
    /// Free-text name filter. An empty string is a valid value and is kept
    /// distinct from the field being absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,
    /// Selected city code, absent when the filter is cleared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Sort field, `name` or `mark`; unknown values pass through untouched.
    #[serde(rename = "_sort", skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sort direction, `asc` or `desc`; unknown values pass through untouched.
    #[serde(rename = "_order", skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// 1-based page number.
    #[serde(rename = "_page", skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

impl ListParams {
    /// Encodes the snapshot as a query string using the wire field names.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted_from_the_query_string() {
        let params = ListParams {
            city: Some("HN".to_string()),
            page: Some(3),
            ..ListParams::default()
        };
        assert_eq!(params.to_query_string(), "city=HN&_page=3");
    }

    #[test]
    fn empty_name_like_survives_the_round_trip() {
        let params = ListParams {
            name_like: Some(String::new()),
            page: Some(1),
            ..ListParams::default()
        };
        let encoded = params.to_query_string();
        assert_eq!(encoded, "name_like=&_page=1");

        let decoded: ListParams = serde_html_form::from_str(&encoded).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn wire_names_are_parsed_back_into_sort_fields() {
        let decoded: ListParams =
            serde_html_form::from_str("name_like=an&_sort=mark&_order=desc&_page=2").unwrap();
        assert_eq!(decoded.name_like.as_deref(), Some("an"));
        assert_eq!(decoded.sort.as_deref(), Some("mark"));
        assert_eq!(decoded.order.as_deref(), Some("desc"));
        assert_eq!(decoded.page, Some(2));
    }
}
