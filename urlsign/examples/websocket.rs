// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
//! Print a presigned connect url for a websocket api.
//!
//! ```shell
//! AWS_REGION=us-east-1 WEBSOCKET_URL=wss://abcd1234.execute-api.us-east-1.amazonaws.com/prod \
//!     AWS_ACCESS_KEY_ID=... AWS_SECRET_ACCESS_KEY=... cargo run --example websocket
//! ```

use std::time::Duration;

use anyhow::Result;
use urlsign::aws::{websocket_api_signer, Config};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let signer = websocket_api_signer(Config {
        expires_in: Some(Duration::from_secs(60)),
        ..Default::default()
    })?;

    let url = signer.presign().await?;
    println!("{}", serde_json::json!({ "websocket_url": url }));

    Ok(())
}
