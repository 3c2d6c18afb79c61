//! Google Sign-In Bridge
//!
//! The Google popup runs in page JavaScript (`window.foodShareAuth`, see
//! `index.html`); this side only receives the resulting id token.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "foodShareAuth"], js_name = googleSignIn, catch)]
    async fn google_sign_in() -> Result<JsValue, JsValue>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleCredential {
    id_token: String,
}

/// Run the Google popup and return its id token
pub async fn google_id_token() -> Result<String, String> {
    let result = google_sign_in()
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Google sign-in was cancelled".to_string()))?;
    let credential: GoogleCredential =
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    Ok(credential.id_token)
}
