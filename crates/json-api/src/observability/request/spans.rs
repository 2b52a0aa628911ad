//! Route names for request spans.

use uuid::Uuid;

/// `GET /products/0190…` becomes `GET /products/{product}`, so log lines group by route.
pub(super) fn route_name(method: &str, path: &str) -> String {
    format!("{method} {}", normalise_path(path))
}

fn normalise_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            normalised.push_str("{product}");
        } else {
            normalised.push_str(segment);
        }
    }

    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_are_replaced_by_a_placeholder() {
        let path = format!("/products/{}", Uuid::now_v7());

        assert_eq!(route_name("PATCH", &path), "PATCH /products/{product}");
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(route_name("GET", "/products"), "GET /products");
        assert_eq!(route_name("GET", "/"), "GET /");
    }
}
