//! Lazy user-timeline stream
//!
//! Pages are fetched strictly one at a time and only when the consumer has
//! drained every node of the previous page. Dropping the stream stops all
//! further requests.
//!
//! A page's nodes are buffered before its pagination metadata is decoded.
//! If the metadata is unusable, the buffered nodes are still yielded and
//! the error follows them as the last item.

use super::Scraper;
use crate::decode::{decode_page_info, decode_timeline_nodes, parse_body};
use crate::error::{Error, Result};
use crate::http::{ApiRequest, Transport};
use crate::pagination::{CursorPaginator, NextPage, PaginationState};
use crate::query::{encode_document_query, TimelineVariables};
use crate::types::TimelineOptions;
use futures::stream::{self, BoxStream, StreamExt};
use serde_json::Value;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Walk state carried between polls
struct TimelineWalk<'a, T: Transport> {
    scraper: &'a Scraper<T>,
    variables: TimelineVariables,
    paginator: CursorPaginator,
    state: PaginationState,
    buffer: VecDeque<Value>,
    /// Raised after the current buffer drains
    deferred: Option<Error>,
}

impl<T: Transport> TimelineWalk<'_, T> {
    /// Fetch the next page into the buffer and advance the cursor
    async fn fetch_page(&mut self) -> Result<()> {
        let scraper = self.scraper;
        let body = encode_document_query(&self.variables, &scraper.config.documents.timeline_doc_id)?;

        debug!(
            "Fetching timeline page {} for {} (after: {:?})",
            self.state.page, self.variables.username, self.variables.after
        );
        let response = scraper
            .transport
            .execute(ApiRequest::post_form(
                &scraper.config.endpoints.graphql_url,
                body,
            ))
            .await?;

        let raw = parse_body(&response)?;
        if let Some(snapshot) = &scraper.snapshot {
            if let Err(e) = snapshot.write(&raw).await {
                warn!("Skipping debug snapshot: {e}");
            }
        }

        let nodes = decode_timeline_nodes(&raw)?;
        let count = nodes.len();
        info!(
            "Timeline page {} for {}: {} posts",
            self.state.page, self.variables.username, count
        );
        self.buffer.extend(nodes);

        let page_info = match decode_page_info(&raw) {
            Ok(page_info) => page_info,
            Err(e) => {
                self.deferred = Some(e);
                return Ok(());
            }
        };

        let next = self
            .paginator
            .process_page(&page_info, count, &mut self.state);

        match next {
            NextPage::Continue { cursor: Some(cursor) } => {
                self.variables.set_after(cursor);
            }
            NextPage::Continue { cursor: None } => {
                self.variables.after = None;
            }
            NextPage::Done(reason) => {
                info!(
                    "Timeline for {} finished ({:?}) after {} posts",
                    self.variables.username, reason, self.state.total_fetched
                );
            }
        }

        Ok(())
    }
}

/// Build the lazy stream of timeline nodes
pub(crate) fn user_posts<'a, T: Transport>(
    scraper: &'a Scraper<T>,
    username: &str,
    options: TimelineOptions,
) -> BoxStream<'a, Result<Value>> {
    let walk = TimelineWalk {
        scraper,
        variables: TimelineVariables::new(username, options.page_size),
        paginator: CursorPaginator::with_max_pages(options.max_pages),
        state: PaginationState::new(),
        buffer: VecDeque::new(),
        deferred: None,
    };

    stream::try_unfold(walk, |mut walk| async move {
        loop {
            if let Some(node) = walk.buffer.pop_front() {
                return Ok(Some((node, walk)));
            }
            if let Some(e) = walk.deferred.take() {
                return Err(e);
            }
            if walk.state.is_done() {
                return Ok(None);
            }
            walk.fetch_page().await?;
        }
    })
    .boxed()
}
