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
//! Print a presigned url for streaming transcription.
//!
//! ```shell
//! AWS_REGION=us-east-1 AWS_ACCESS_KEY_ID=... AWS_SECRET_ACCESS_KEY=... \
//!     cargo run --example transcribe
//! ```

use anyhow::Result;
use urlsign::aws::{transcribe_streaming_signer, Config};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let signer = transcribe_streaming_signer(Config {
        sample_rate: Some(44100),
        ..Default::default()
    })?;

    let url = signer.presign().await?;
    println!("{url}");

    Ok(())
}
