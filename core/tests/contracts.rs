use effio_codegen_core::{classify, partition};
use effio_contracts::{AccountServiceContract, AccountV1Endpoint, AuthEndpoint, AuthServiceContract};
use serde_json::{json, Map, Value};

#[test]
fn test_contract_endpoints_classify_to_their_service() {
    for endpoint in AccountV1Endpoint::ALL {
        assert_eq!(classify(endpoint.path()), AccountServiceContract::SERVICE);
    }
    for endpoint in AuthEndpoint::ALL {
        assert_eq!(classify(endpoint.path()), AuthServiceContract::SERVICE);
    }
}

#[test]
fn test_contract_document_splits_into_contract_services() {
    let paths: Map<String, Value> = AccountV1Endpoint::ALL
        .iter()
        .map(|e| e.path())
        .chain(AuthEndpoint::ALL.iter().map(|e| e.path()))
        .map(|path| (path.to_string(), json!({ "post": {} })))
        .collect();
    let document = json!({ "openapi": "3.0.0", "info": { "title": "Effio" }, "paths": paths });

    let parts = partition(&document);
    let services: Vec<&String> = parts.keys().collect();
    assert_eq!(
        services,
        [AccountServiceContract::SERVICE, AuthServiceContract::SERVICE]
    );
    assert_eq!(parts[AccountServiceContract::SERVICE].path_names().len(), 7);
    assert_eq!(
        parts[AuthServiceContract::SERVICE].document()["info"]["title"],
        "Effio - Auth"
    );
}
