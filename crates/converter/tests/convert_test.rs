//! End-to-end conversion test on a realistic collection export

use post2swag_converter::{convert_json, convert_or_error};
use pretty_assertions::assert_eq;
use serde_json::json;

const SHOP_COLLECTION: &str = r##"{
    "info": {
        "name": "Shop API",
        "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
    },
    "variable": [
        { "key": "server", "value": "https://shop.example.com/api/v1" }
    ],
    "item": [
        {
            "name": "Auth",
            "item": [
                {
                    "name": "Login",
                    "request": {
                        "method": "POST",
                        "url": "{{server}}/auth/login",
                        "body": {
                            "mode": "raw",
                            "raw": "{\n  \"email\": \"jane@example.com\", // account email\n  \"password\": \"secret\"\n}"
                        }
                    },
                    "response": []
                },
                {
                    "name": "Register",
                    "request": {
                        "method": "POST",
                        "url": "{{server}}/auth/register",
                        "body": {
                            "mode": "formdata",
                            "formdata": [
                                { "key": "username", "value": "jane", "required": true },
                                { "key": "avatar", "type": "file" }
                            ]
                        }
                    }
                }
            ]
        },
        {
            "name": "Users",
            "item": [
                {
                    "name": "Get User Profile!",
                    "description": "Fetch a single user by id",
                    "request": {
                        "method": "GET",
                        "url": {
                            "raw": "{{server}}/users/:id?expand=orders&debug=1",
                            "host": ["{{server}}"],
                            "path": ["users", ":id"],
                            "query": [
                                { "key": "expand", "value": "orders" },
                                { "key": "debug", "value": "1", "disabled": true }
                            ]
                        }
                    }
                },
                {
                    "name": "Delete user",
                    "request": {
                        "method": "DELETE",
                        "url": "{{server}}/users/:id"
                    }
                }
            ]
        },
        {
            "name": "Ping (old)",
            "request": { "method": "GET", "url": "{{server}}/ping" }
        },
        {
            "name": "Ping",
            "request": { "method": "GET", "url": "{{server}}/ping" }
        }
    ]
}"##;

#[test]
fn test_convert_shop_collection() {
    let document = convert_json(SHOP_COLLECTION).unwrap();
    let doc = serde_json::to_value(&document).unwrap();

    // Envelope
    assert_eq!(doc["openapi"], "3.0.0");
    assert_eq!(doc["info"]["title"], "Shop API");
    assert_eq!(doc["info"]["version"], "1.0.0");
    assert_eq!(doc["servers"][0]["url"], "https://shop.example.com/api/v1");
    assert_eq!(
        doc["components"]["securitySchemes"]["bearerAuth"],
        json!({ "type": "http", "scheme": "bearer", "bearerFormat": "JWT" })
    );

    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.keys().all(|path| path.starts_with('/')));

    // Auth endpoints carry no security requirement; the login body is a
    // JSON schema inferred after comment stripping
    let login = &paths["/auth/login"]["post"];
    assert_eq!(login["tags"], json!(["Auth"]));
    assert!(login.get("security").is_none());
    assert_eq!(
        login["requestBody"]["content"]["application/json"]["schema"],
        json!({
            "type": "object",
            "properties": {
                "email": { "type": "string" },
                "password": { "type": "string" }
            }
        })
    );

    let register = &paths["/auth/register"]["post"];
    assert!(register.get("security").is_none());
    assert_eq!(
        register["requestBody"]["content"]["multipart/form-data"]["schema"],
        json!({
            "type": "object",
            "properties": {
                "username": { "type": "string", "example": "jane" },
                "avatar": { "type": "string", "format": "binary" }
            },
            "required": ["username"]
        })
    );

    // Path template rewriting plus path/query parameters
    let get_user = &paths["/users/{id}"]["get"];
    assert_eq!(get_user["operationId"], "getUserProfile");
    assert_eq!(get_user["summary"], "Get User Profile!");
    assert_eq!(get_user["description"], "Fetch a single user by id");
    assert_eq!(get_user["tags"], json!(["Users"]));
    assert_eq!(get_user["security"], json!([{ "bearerAuth": [] }]));
    assert_eq!(
        get_user["parameters"],
        json!([
            { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } },
            { "name": "expand", "in": "query", "required": false, "schema": { "type": "string" } }
        ])
    );

    // Same path, different method, same entry
    assert!(paths["/users/{id}"]
        .as_object()
        .unwrap()
        .contains_key("delete"));

    // Two requests collapsed onto (/ping, get): the later one wins
    let ping = &paths["/ping"]["get"];
    assert_eq!(ping["summary"], "Ping");
    assert_eq!(ping["operationId"], "ping");
    assert!(ping.get("parameters").is_none());
    assert!(ping.get("requestBody").is_none());
    assert_eq!(
        ping["responses"],
        json!({
            "200": { "description": "Successful operation" },
            "400": { "description": "Bad request" },
            "401": { "description": "Unauthorized" },
            "404": { "description": "Not found" },
            "500": { "description": "Internal server error" }
        })
    );
}

#[test]
fn test_every_path_parameter_is_declared() {
    let document = convert_json(SHOP_COLLECTION).unwrap();

    for (path, operations) in &document.paths {
        let placeholders: Vec<&str> = path
            .split('/')
            .filter(|segment| segment.starts_with('{') && segment.ends_with('}'))
            .map(|segment| &segment[1..segment.len() - 1])
            .collect();

        for operation in operations.values() {
            for placeholder in &placeholders {
                assert!(
                    operation
                        .parameters
                        .iter()
                        .any(|p| p.location == "path" && p.required && p.name == *placeholder),
                    "missing path parameter {} for {}",
                    placeholder,
                    path
                );
            }
        }
    }
}

#[test]
fn test_conversion_is_deterministic() {
    let first = serde_json::to_string(&convert_json(SHOP_COLLECTION).unwrap()).unwrap();
    let second = serde_json::to_string(&convert_json(SHOP_COLLECTION).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_error_object_for_malformed_input() {
    for input in ["not json", "[1, 2, 3]", r#"{"item": [{"name": "dangling"}]}"#] {
        let value = convert_or_error(input);
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 1, "input {:?} must produce the error object", input);
        assert!(map["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to convert: "));
    }
}

#[test]
fn test_collection_without_items_converts() {
    let document = convert_json(r#"{ "info": { "name": "Empty" } }"#).unwrap();
    assert!(document.paths.is_empty());
    assert_eq!(document.servers[0].url, "http://localhost:8000/api/v1");
}
