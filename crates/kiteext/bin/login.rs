// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Example demonstrating the credential login flow and an authenticated request.
//!
//! # Prerequisites
//!
//! Set environment variables with your Kite account credentials:
//! - `KITE_USER_ID`, `KITE_PASSWORD`, and `KITE_TWOFA` (current TOTP/PIN value)

use kiteext::{config::KiteClientConfig, http::KiteHttpClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let user_id = std::env::var("KITE_USER_ID")?;
    let password = std::env::var("KITE_PASSWORD")?;
    let twofa = std::env::var("KITE_TWOFA")?;

    let config = KiteClientConfig {
        user_id: Some(user_id.clone()),
        debug: true,
        ..Default::default()
    };
    let client = KiteHttpClient::new(config)?;

    println!("Logging in as {user_id}...");
    client
        .login_with_credentials(&user_id, &password, &twofa)
        .await?;
    println!("Session established");

    match client.margin_data().await {
        Ok(margins) => println!("{margins:#}"),
        Err(e) => {
            eprintln!("✗ Failed to fetch margin data: {e}");
            return Err(e.into());
        }
    }

    let ticker = client.ticker(None, None)?;
    println!("Ticker URL ready: {ticker:?}");

    Ok(())
}
