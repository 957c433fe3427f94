//! License catalog and `LICENSE` file content.
//!
//! Licenses are addressed by shortcut (`mit`, `gnu3`, ...) or full name.
//! The short permissive texts are embedded; longer ones are fetched from the
//! GitHub licenses API, with the author and year substituted into the
//! placeholders the API bodies use.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_API_URL: &str = "https://api.github.com/licenses";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum License {
    Apache2,
    Bsd2,
    Bsd3,
    Cc0,
    Eclipse2,
    Gpl2,
    Gpl3,
    Agpl3,
    Lgpl21,
    Lgpl3,
    Mit,
    Mpl2,
    Unlicense,
}

/// Every license with its shortcut, ordered as presented to the user.
const ALL: &[(License, &str)] = &[
    (License::Apache2, "apache"),
    (License::Bsd2, "bsd2"),
    (License::Bsd3, "bsd3"),
    (License::Cc0, "CC"),
    (License::Eclipse2, "eclipse"),
    (License::Gpl2, "gnu2"),
    (License::Gpl3, "gnu3"),
    (License::Agpl3, "gnuAffero3"),
    (License::Lgpl21, "gnuLess2.1"),
    (License::Lgpl3, "gnuLess3"),
    (License::Mit, "mit"),
    (License::Mpl2, "mozilla"),
    (License::Unlicense, "unlicense"),
];

#[derive(Debug, Error)]
pub enum LicenseError {
    #[error("unknown license `{key}`; valid keys are: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("failed to fetch the {name} text from the GitHub licenses API")]
    Fetch {
        name: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl License {
    /// Look a license up by shortcut or full name, case-insensitively.
    pub fn from_key(key: &str) -> Result<Self, LicenseError> {
        let lowered = key.to_lowercase();
        ALL.iter()
            .find(|(license, shortcut)| {
                shortcut.to_lowercase() == lowered || license.full_name().to_lowercase() == lowered
            })
            .map(|(license, _)| *license)
            .ok_or_else(|| LicenseError::UnknownKey {
                key: key.to_string(),
                valid: ALL
                    .iter()
                    .map(|(_, shortcut)| *shortcut)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            License::Apache2 => "Apache License 2.0",
            License::Bsd2 => "BSD 2-Clause \"Simplified\" License",
            License::Bsd3 => "BSD 3-Clause \"New\" or \"Revised\" License",
            License::Cc0 => "Creative Commons Zero v1.0 Universal",
            License::Eclipse2 => "Eclipse Public License 2.0",
            License::Gpl2 => "GNU General Public License v2.0",
            License::Gpl3 => "GNU General Public License v3.0",
            License::Agpl3 => "GNU Affero General Public License v3.0",
            License::Lgpl21 => "GNU Lesser General Public License v2.1",
            License::Lgpl3 => "GNU Lesser General Public License v3.0",
            License::Mit => "MIT License",
            License::Mpl2 => "Mozilla Public License 2.0",
            License::Unlicense => "Unlicense",
        }
    }

    /// SPDX identifier, as used by the GitHub licenses API.
    pub fn spdx_id(&self) -> &'static str {
        match self {
            License::Apache2 => "apache-2.0",
            License::Bsd2 => "bsd-2-clause",
            License::Bsd3 => "bsd-3-clause",
            License::Cc0 => "cc0-1.0",
            License::Eclipse2 => "epl-2.0",
            License::Gpl2 => "gpl-2.0",
            License::Gpl3 => "gpl-3.0",
            License::Agpl3 => "agpl-3.0",
            License::Lgpl21 => "lgpl-2.1",
            License::Lgpl3 => "lgpl-3.0",
            License::Mit => "mit",
            License::Mpl2 => "mpl-2.0",
            License::Unlicense => "unlicense",
        }
    }

    /// Embedded text for the short licenses; `None` for those fetched from
    /// the API.
    fn embedded(&self) -> Option<&'static str> {
        match self {
            License::Mit => Some(MIT_TEXT),
            License::Bsd2 => Some(BSD2_TEXT),
            License::Bsd3 => Some(BSD3_TEXT),
            License::Unlicense => Some(UNLICENSE_TEXT),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ApiLicense {
    body: String,
}

/// Produces the full text for a `LICENSE` file.
pub struct LicenseCatalog {
    client: Client,
    api_url: String,
}

impl Default for LicenseCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl LicenseCatalog {
    /// The API URL is overridable for tests.
    pub fn new(api_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("progen")
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    /// The license text with the author and year filled in.
    pub fn text(&self, license: License, author: &str, year: i32) -> Result<String, LicenseError> {
        let body = match license.embedded() {
            Some(text) => text.to_string(),
            None => {
                let url = format!("{}/{}", self.api_url, license.spdx_id());
                let fetched: ApiLicense = self
                    .client
                    .get(&url)
                    .send()
                    .and_then(reqwest::blocking::Response::error_for_status)
                    .and_then(reqwest::blocking::Response::json)
                    .map_err(|source| LicenseError::Fetch {
                        name: license.full_name(),
                        source,
                    })?;
                fetched.body
            }
        };
        Ok(substitute(&body, author, year))
    }
}

/// Fill the placeholder spellings the GitHub API bodies use.
fn substitute(body: &str, author: &str, year: i32) -> String {
    let year = year.to_string();
    body.replace("[year]", &year)
        .replace("[yyyy]", &year)
        .replace("[fullname]", author)
        .replace("[name of copyright owner]", author)
}

const MIT_TEXT: &str = "\
MIT License

Copyright (c) [year] [fullname]

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

const BSD2_TEXT: &str = "\
BSD 2-Clause License

Copyright (c) [year], [fullname]

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are met:

1. Redistributions of source code must retain the above copyright notice, this
   list of conditions and the following disclaimer.

2. Redistributions in binary form must reproduce the above copyright notice,
   this list of conditions and the following disclaimer in the documentation
   and/or other materials provided with the distribution.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\"
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
";

const BSD3_TEXT: &str = "\
BSD 3-Clause License

Copyright (c) [year], [fullname]

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are met:

1. Redistributions of source code must retain the above copyright notice, this
   list of conditions and the following disclaimer.

2. Redistributions in binary form must reproduce the above copyright notice,
   this list of conditions and the following disclaimer in the documentation
   and/or other materials provided with the distribution.

3. Neither the name of the copyright holder nor the names of its
   contributors may be used to endorse or promote products derived from
   this software without specific prior written permission.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS \"AS IS\"
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
";

const UNLICENSE_TEXT: &str = "\
This is free and unencumbered software released into the public domain.

Anyone is free to copy, modify, publish, use, compile, sell, or
distribute this software, either in source code form or as a compiled
binary, for any purpose, commercial or non-commercial, and by any
means.

In jurisdictions that recognize copyright laws, the author or authors
of this software dedicate any and all copyright interest in the
software to the public domain. We make this dedication for the benefit
of the public at large and to the detriment of our heirs and
successors. We intend this dedication to be an overt act of
relinquishment in perpetuity of all present and future rights to this
software under copyright law.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND,
EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY CLAIM, DAMAGES OR
OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE,
ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR
OTHER DEALINGS IN THE SOFTWARE.

For more information, please refer to <https://unlicense.org>
";

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn shortcut_and_full_name_resolve_to_the_same_license() {
        assert_eq!(License::from_key("mit").unwrap(), License::Mit);
        assert_eq!(License::from_key("MIT License").unwrap(), License::Mit);
        assert_eq!(License::from_key("gnuaffero3").unwrap(), License::Agpl3);
        assert_eq!(License::from_key("gnuLess2.1").unwrap(), License::Lgpl21);
    }

    #[test]
    fn unknown_key_lists_valid_shortcuts() {
        let err = License::from_key("wtfpl").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("wtfpl"));
        assert!(message.contains("mit"));
        assert!(message.contains("gnuAffero3"));
    }

    #[test]
    fn embedded_license_substitutes_author_and_year() {
        let catalog = LicenseCatalog::default();
        let text = catalog.text(License::Mit, "Jane Doe", 2026).unwrap();
        assert!(text.contains("Copyright (c) 2026 Jane Doe"));
        assert!(!text.contains("[year]"));
        assert!(!text.contains("[fullname]"));
    }

    #[test]
    fn long_license_is_fetched_from_the_api() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/apache-2.0");
            then.status(200)
                .json_body(serde_json::json!({ "body": "Copyright [yyyy] [name of copyright owner]" }));
        });

        let catalog = LicenseCatalog::new(server.base_url());
        let text = catalog.text(License::Apache2, "Jane Doe", 2026).unwrap();
        assert_eq!(text, "Copyright 2026 Jane Doe");
    }

    #[test]
    fn api_failure_is_a_fetch_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gpl-3.0");
            then.status(500);
        });

        let catalog = LicenseCatalog::new(server.base_url());
        let err = catalog.text(License::Gpl3, "Jane Doe", 2026).unwrap_err();
        assert!(matches!(err, LicenseError::Fetch { .. }));
    }
}
