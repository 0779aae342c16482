//! Browser console greeting, printed once on mount.

use petchain_site::Catalog;
use wasm_bindgen::JsValue;

fn banner() -> String {
    let catalog = Catalog::builtin();
    let icons: String = catalog.entries().iter().map(|e| e.icon).collect();
    format!(
        r#"
  ___     _    ___ _         _
 | _ \___| |_ / __| |_  __ _(_)_ _
 |  _/ -_)  _| (__| ' \/ _` | | ' \
 |_| \___|\__|\___|_||_\__,_|_|_||_|

  {icons}
  Pet health records, always accessible.
  v{}
"#,
        env!("CARGO_PKG_VERSION")
    )
}

pub fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", banner())),
        &JsValue::from_str("color: #2563eb; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cSource: https://github.com/DogStark/petChain-Frontend"),
        &JsValue::from_str("color: #6b7280;"),
    );
}
