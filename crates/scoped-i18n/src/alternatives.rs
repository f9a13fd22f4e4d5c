use crate::{Keys, Params};

/// Candidate paths for `keys`, in lookup order.
///
/// Per key: call scope (`$scope` param), then instance scope, then the bare
/// key. The per-key lists are concatenated in key order.
pub fn alternatives(keys: &Keys, params: Option<&Params>, scope: Option<&str>) -> Vec<String> {
    let scopes: Vec<&str> = [params.and_then(Params::scope), scope]
        .into_iter()
        .flatten()
        .filter(|scope| !scope.is_empty())
        .collect();

    let mut candidates = Vec::with_capacity(keys.len() * (scopes.len() + 1));
    for key in keys.iter() {
        for scope in &scopes {
            candidates.push(format!("{scope}.{key}"));
        }
        candidates.push(key.to_owned());
    }

    candidates
}
