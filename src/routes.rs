//! Route Paths
//!
//! Hrefs used for navigation between pages.

pub const ROOT: &str = "/";

pub fn edit_href(id: i64) -> String {
    format!("/edit/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit_form::parse_route_id;

    #[test]
    fn test_edit_href_round_trips_through_route_parsing() {
        let href = edit_href(5);
        assert_eq!(href, "/edit/5");
        assert_eq!(parse_route_id(href.strip_prefix("/edit/")), Ok(5));
    }
}
