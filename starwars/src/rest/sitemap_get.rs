// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! API to describe all other APIs.

use crate::rest::ENDPOINTS;
use axum::response::Html;

/// API handler.
pub(crate) async fn handler() -> Html<String> {
    let mut body = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>Star Wars API</title></head>\n<body>\n<ul>\n",
    );
    for (method, path) in ENDPOINTS {
        body.push_str(&format!("<li><code>{} {}</code></li>\n", method, path));
    }
    body.push_str("</ul>\n</body>\n</html>\n");
    Html(body)
}
