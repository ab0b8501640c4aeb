//! Backend API Wrappers
//!
//! Frontend bindings to the HTTP backend, one async function per endpoint.
//! Every failure collapses to a `String`; callers log it and move on.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{
    ApiFailure, CatalogEntry, Game, GameId, ListChangeRequest, ListChangeResponse, LoginArgs,
    Session, SignupArgs,
};

const SESSION_HEADER: &str = "x-session-token";

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// One request/response exchange against the backend.
///
/// Returns the parsed JSON body on 2xx, or the backend's error message
/// (falling back to the HTTP status) otherwise.
async fn exchange(
    method: &str,
    path: &str,
    body: Option<String>,
    token: Option<&str>,
) -> Result<JsValue, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(path, &opts).map_err(js_error)?;
    request
        .headers()
        .set("content-type", "application/json")
        .map_err(js_error)?;
    if let Some(token) = token {
        request.headers().set(SESSION_HEADER, token).map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;

    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    if !response.ok() {
        return match serde_wasm_bindgen::from_value::<ApiFailure>(json) {
            Ok(failure) => Err(failure.message),
            Err(_) => Err(format!("request failed with status {}", response.status())),
        };
    }
    Ok(json)
}

async fn get_json(path: &str, token: Option<&str>) -> Result<JsValue, String> {
    exchange("GET", path, None, token).await
}

async fn post_json<T: serde::Serialize>(
    path: &str,
    payload: &T,
    token: Option<&str>,
) -> Result<JsValue, String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    exchange("POST", path, Some(body), token).await
}

// ========================
// List Mutations
// ========================

/// `POST /add` with `{response: "<id>"}`; the backend echoes the identifier.
pub async fn add_to_list(id: GameId, token: Option<&str>) -> Result<ListChangeResponse, String> {
    let payload = ListChangeRequest {
        response: id.to_string(),
    };
    let result = post_json("/add", &payload, token).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// `POST /remove` with `{response: "<id>"}`; the backend echoes the identifier.
pub async fn remove_from_list(
    id: GameId,
    token: Option<&str>,
) -> Result<ListChangeResponse, String> {
    let payload = ListChangeRequest {
        response: id.to_string(),
    };
    let result = post_json("/remove", &payload, token).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// ========================
// Catalog and Wishlist
// ========================

pub async fn fetch_catalog(token: Option<&str>) -> Result<Vec<CatalogEntry>, String> {
    let result = get_json("/games", token).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn search_games(query: &str, token: Option<&str>) -> Result<Vec<CatalogEntry>, String> {
    let encoded = js_sys::encode_uri_component(query);
    let path = format!("/search?q={}", String::from(encoded));
    let result = get_json(&path, token).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn fetch_wishlist(token: Option<&str>) -> Result<Vec<Game>, String> {
    let result = get_json("/my-games", token).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// ========================
// Accounts
// ========================

pub async fn signup(args: &SignupArgs) -> Result<(), String> {
    let _ = post_json("/signup", args, None).await?;
    Ok(())
}

pub async fn login(args: &LoginArgs) -> Result<Session, String> {
    let result = post_json("/login", args, None).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn logout(token: &str) -> Result<(), String> {
    let _ = exchange("POST", "/logout", None, Some(token)).await?;
    Ok(())
}
