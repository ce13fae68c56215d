// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

/// A stored session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    /// The opaque session token presented as a bearer credential.
    pub token: String,
    /// The operator this session belongs to.
    pub operator_id: i64,
    /// Expiry instant, ISO-8601.
    pub expires_at: String,
}

impl SessionData {
    /// Returns whether this session has expired as of `now`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidTimestamp` if the stored expiry cannot
    /// be parsed.
    pub fn is_expired(&self, now: OffsetDateTime) -> Result<bool, StoreError> {
        let expires: OffsetDateTime = OffsetDateTime::parse(&self.expires_at, &Iso8601::DEFAULT)
            .map_err(|_| StoreError::InvalidTimestamp(self.expires_at.clone()))?;
        Ok(now >= expires)
    }
}
