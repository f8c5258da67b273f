//! Pull-based marker pagination over "list servers".
//!
//! Covers the whole inventory without overlap as long as nobody deletes or
//! reorders servers mid-scan; concurrent modification is not guarded against.

use crate::compute::ComputeApi;
use crate::error::compute::ComputeError;

use models::ServerRecord;

use std::collections::VecDeque;
use std::num::NonZeroU32;

use log::trace;

/// Single forward pass over every server visible to the client.
///
/// Only an empty page ends the scan; a short or exactly-full page is always
/// followed by another request. After the end, or after an error, `next`
/// keeps returning `Ok(None)`.
pub struct ServerPaginator<'a, C: ComputeApi> {
    client: &'a C,
    page_size: NonZeroU32,
    marker: Option<String>,
    buffer: VecDeque<ServerRecord>,
    finished: bool,
    pages_fetched: usize,
}

impl<'a, C: ComputeApi> ServerPaginator<'a, C> {
    pub fn new(client: &'a C, page_size: NonZeroU32) -> Self {
        Self {
            client,
            page_size,
            marker: None,
            buffer: VecDeque::new(),
            finished: false,
            pages_fetched: 0,
        }
    }

    /// Next server, `Ok(None)` at the end, or the transport error that ended the scan.
    pub async fn next(&mut self) -> Result<Option<ServerRecord>, ComputeError> {
        loop {
            if let Some(server) = self.buffer.pop_front() {
                return Ok(Some(server));
            }

            if self.finished {
                return Ok(None);
            }

            self.fetch_page().await?;
        }
    }

    /// Requests issued so far, including the final empty one.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    async fn fetch_page(&mut self) -> Result<(), ComputeError> {
        let page = match self
            .client
            .list_servers(self.marker.as_deref(), self.page_size)
            .await
        {
            Ok(page) => page,
            Err(e) => {
                self.finished = true;
                return Err(e);
            }
        };
        self.pages_fetched += 1;

        match page.last() {
            None => {
                trace!("Empty page after {} requests, scan complete", self.pages_fetched);
                self.finished = true;
            }
            Some(last) => {
                trace!(
                    "Page {} returned {} servers, next marker {}",
                    self.pages_fetched,
                    page.len(),
                    last.id
                );
                self.marker = Some(last.id.clone());
                self.buffer.extend(page);
            }
        }

        Ok(())
    }
}
