//! Per-verb route contract generation.
//!
//! Each of the four verbs gets an independent contract built from the
//! subset of routes whose method matches it (the `all` wildcard
//! contributes to every verb). A verb with no routes falls back to a
//! permissive signature so the call surface stays usable before the
//! server publishes anything for it.

use contract_define::{RouteDescriptor, ScopedPath, Verb};
use strum::IntoEnumIterator;

use crate::ident::pascal_ident;
use crate::scope::{FUNCTIONLESS_ANY, wrapped_or_any};

pub(crate) fn verb_pascal(verb: Verb) -> &'static str {
    match verb {
        Verb::Post => "Post",
        Verb::Put => "Put",
        Verb::Get => "Get",
        Verb::Delete => "Delete",
    }
}

pub(crate) fn verb_upper(verb: Verb) -> &'static str {
    match verb {
        Verb::Post => "POST",
        Verb::Put => "PUT",
        Verb::Get => "GET",
        Verb::Delete => "DELETE",
    }
}

/// Whether calls with this verb carry a request body argument.
fn verb_has_body(verb: Verb) -> bool {
    matches!(verb, Verb::Post | Verb::Put)
}

/// Escapes a value for embedding in a generated string literal.
pub(crate) fn quote_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders the permissive fallback contract for a verb.
///
/// Emitted when the verb's subset is empty; also the building block of
/// the reset baseline. Accepts any URL string and generically-typed
/// payloads, so it never references descriptor-derived literals.
pub fn permissive_verb(verb: Verb) -> String {
    let pascal = verb_pascal(verb);
    let method = verb.to_string();
    let data_param = if verb_has_body(verb) { "data: Any, " } else { "" };

    format!(
        "/// Permissive {upper} call surface: no routes are published for this verb.\n\
         pub trait Api{pascal} {{\n\
         \x20   fn {method}(&self, url: &str, {data_param}config: RequestConfig<Any>) -> HttpResponse<Any>;\n\
         }}\n\n",
        upper = verb_upper(verb),
    )
}

/// Renders the full contract for a verb's non-empty route subset.
fn verb_section(verb: Verb, subset: &[&RouteDescriptor]) -> String {
    let pascal = verb_pascal(verb);
    let upper = verb_upper(verb);
    let method = verb.to_string();
    let mut out = String::new();

    // Closed literal union of this verb's normalized paths.
    out.push_str(&format!(
        "/// Closed set of {upper} routes published for the current scope.\npub enum Api{pascal}Url {{\n"
    ));
    for route in subset {
        out.push_str(&format!("    {},\n", pascal_ident(route.scoped_path())));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("impl Api{pascal}Url {{\n"));
    out.push_str("    pub const fn as_str(&self) -> &'static str {\n        match self {\n");
    for route in subset {
        out.push_str(&format!(
            "            Self::{} => \"{}\",\n",
            pascal_ident(route.scoped_path()),
            quote_literal(route.scoped_path()),
        ));
    }
    out.push_str("        }\n    }\n\n");

    // Ordered discriminator: the earliest route wins for a duplicated
    // literal, later arms are simply unreachable.
    out.push_str("    pub fn from_url(url: &str) -> Option<Self> {\n        match url {\n");
    for route in subset {
        out.push_str(&format!(
            "            \"{}\" => Some(Self::{}),\n",
            quote_literal(route.scoped_path()),
            pascal_ident(route.scoped_path()),
        ));
    }
    out.push_str("            _ => None,\n        }\n    }\n}\n\n");

    // Contract trait and one marker struct per route.
    out.push_str(&format!(
        "/// Per-route {upper} contract: url literal plus body, response,\n/// header, and params shapes.\npub trait Api{pascal}Route {{\n    const URL: &'static str;\n    type Body;\n    type Response;\n    type Headers;\n    type Params;\n}}\n\n"
    ));

    for route in subset {
        let marker = format!("{pascal}{}", pascal_ident(route.scoped_path()));
        out.push_str(&format!("pub struct {marker};\n\n"));
        out.push_str(&format!(
            "impl Api{pascal}Route for {marker} {{\n\
             \x20   const URL: &'static str = \"{url}\";\n\
             \x20   type Body = {body};\n\
             \x20   type Response = {response};\n\
             \x20   type Headers = {headers};\n\
             \x20   type Params = {params};\n\
             }}\n\n",
            url = quote_literal(route.scoped_path()),
            body = wrapped_or_any(&route.request_body_type_string),
            response = wrapped_or_any(&route.response_body_type_string),
            headers = wrapped_or_any(&route.request_headers_type_string),
            params = wrapped_or_any(&route.request_params_type_string),
        ));
    }

    // Plain url -> response-type table for external lookups.
    out.push_str(&format!("pub const API_{upper}_RESPONSES: &[(&str, &str)] = &[\n"));
    for route in subset {
        out.push_str(&format!(
            "    (\"{}\", \"{}\"),\n",
            quote_literal(route.scoped_path()),
            quote_literal(wrapped_or_any(&route.response_body_type_string)),
        ));
    }
    out.push_str("];\n\n");
    out.push_str(&format!(
        "pub fn api_{method}_response_type(url: &str) -> Option<&'static str> {{\n\
         \x20   API_{upper}_RESPONSES.iter().find(|(u, _)| *u == url).map(|(_, t)| *t)\n\
         }}\n\n"
    ));

    // Options shape; the headers field only exists when some route in
    // the subset actually constrains its headers.
    let any_headers = subset
        .iter()
        .any(|r| wrapped_or_any(&r.request_headers_type_string) != FUNCTIONLESS_ANY);
    out.push_str(&format!("pub struct Api{pascal}Options<R: Api{pascal}Route> {{\n"));
    if any_headers {
        out.push_str("    pub headers: Option<R::Headers>,\n");
    }
    out.push_str("    pub params: Option<R::Params>,\n}\n\n");

    // Verb-level call signature, generic over the route contract.
    let data_param = if verb_has_body(verb) { "data: R::Body, " } else { "" };
    out.push_str(&format!(
        "pub trait Api{pascal} {{\n\
         \x20   fn {method}<R: Api{pascal}Route>(&self, url: R, {data_param}config: RequestConfig<R::Body>, options: Api{pascal}Options<R>) -> HttpResponse<R::Response>;\n\
         }}\n\n"
    ));

    out
}

/// Renders all four verb contracts from the normalized route list.
///
/// Verbs are emitted in [`Verb`]'s declaration order; within a verb,
/// routes keep the filtered list's order.
pub fn routes_section(routes: &[RouteDescriptor]) -> String {
    let mut out = String::new();

    for verb in Verb::iter() {
        let subset: Vec<&RouteDescriptor> =
            routes.iter().filter(|r| r.method.matches(verb)).collect();
        if subset.is_empty() {
            out.push_str(&permissive_verb(verb));
        } else {
            out.push_str(&verb_section(verb, &subset));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_define::Method;

    fn route(path: &str, method: Method, fields: serde_json::Value) -> RouteDescriptor {
        let mut value = serde_json::json!({
            "fileUrl": "test.ts",
            "full_route_path": path,
            "method": method,
        });
        value
            .as_object_mut()
            .unwrap()
            .extend(fields.as_object().cloned().unwrap_or_default());
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_list_emits_four_permissive_traits() {
        let text = routes_section(&[]);
        for pascal in ["Post", "Put", "Get", "Delete"] {
            assert!(text.contains(&format!("pub trait Api{pascal}")));
            assert!(!text.contains(&format!("Api{pascal}Url")));
        }
        assert!(!text.contains("const URL"));
    }

    #[test]
    fn wildcard_route_contributes_to_every_verb() {
        let routes = vec![route("health", Method::All, serde_json::json!({}))];
        let text = routes_section(&routes);
        for pascal in ["Post", "Put", "Get", "Delete"] {
            assert!(text.contains(&format!("pub enum Api{pascal}Url")));
            assert!(text.contains(&format!("impl Api{pascal}Route for {pascal}Health")));
        }
    }

    #[test]
    fn concrete_method_only_reaches_its_own_verb() {
        let routes = vec![route(
            "profile",
            Method::Get,
            serde_json::json!({"response_body_type_string": "OmitFunctions<Profile>"}),
        )];
        let text = routes_section(&routes);

        assert!(text.contains("pub enum ApiGetUrl"));
        assert!(text.contains("type Response = OmitFunctions<Profile>;"));
        // The other three verbs fall back to permissive signatures.
        for pascal in ["Post", "Put", "Delete"] {
            assert!(!text.contains(&format!("pub enum Api{pascal}Url")));
            assert!(text.contains(&format!("pub trait Api{pascal}")));
        }
    }

    #[test]
    fn absent_type_strings_splice_the_any_projection() {
        let routes = vec![route("bare", Method::Post, serde_json::json!({}))];
        let text = routes_section(&routes);
        assert!(text.contains("type Body = OmitFunctions<Any>;"));
        assert!(text.contains("type Response = OmitFunctions<Any>;"));
    }

    #[test]
    fn headers_field_gated_on_nontrivial_header_types() {
        let without = routes_section(&[route("a", Method::Put, serde_json::json!({}))]);
        assert!(!without.contains("pub headers"));

        let with = routes_section(&[
            route("a", Method::Put, serde_json::json!({})),
            route(
                "b",
                Method::Put,
                serde_json::json!({"request_headers_type_string": "OmitFunctions<AuthHeaders>"}),
            ),
        ]);
        assert!(with.contains("pub headers: Option<R::Headers>,"));
    }

    #[test]
    fn duplicate_literals_shadow_by_order() {
        let routes = vec![
            route(
                "dup",
                Method::Get,
                serde_json::json!({"response_body_type_string": "OmitFunctions<First>"}),
            ),
            route(
                "dup",
                Method::Get,
                serde_json::json!({"response_body_type_string": "OmitFunctions<Second>"}),
            ),
        ];
        let text = routes_section(&routes);

        let first = text.find("(\"dup\", \"OmitFunctions<First>\")").unwrap();
        let second = text.find("(\"dup\", \"OmitFunctions<Second>\")").unwrap();
        assert!(first < second, "earliest descriptor must win the table");
    }

    #[test]
    fn body_verbs_take_data_and_query_verbs_do_not() {
        let routes = vec![route("x", Method::All, serde_json::json!({}))];
        let text = routes_section(&routes);
        assert!(text.contains("fn post<R: ApiPostRoute>(&self, url: R, data: R::Body,"));
        assert!(text.contains("fn get<R: ApiGetRoute>(&self, url: R, config:"));
        assert!(text.contains("fn delete<R: ApiDeleteRoute>(&self, url: R, config:"));
    }
}
