/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Walking the pages of a collection.
//!
//! A page without a `prev` link is the first page, one without a `next` link the last.
//! Nothing here performs network calls except [`Client::pages`] and [`Client::resources`]
//! which execute the derived requests.

use crate::v2::errors::LightroomError;
use crate::v2::{Client, Link, Request, Resource, Resources};
use async_stream::try_stream;
use futures::Stream;
use log::trace;
use serde::de::DeserializeOwned;

const PREV_REL: &str = "prev";
const NEXT_REL: &str = "next";

impl<P> Resources<P> {
    pub fn prev_link(&self) -> Option<&Link> {
        self.links.as_ref()?.get(PREV_REL)
    }

    pub fn next_link(&self) -> Option<&Link> {
        self.links.as_ref()?.get(NEXT_REL)
    }

    pub fn prev_url(&self) -> Option<String> {
        self.prev_link().map(|link| format!("{}{}", self.base, link.href))
    }

    pub fn next_url(&self) -> Option<String> {
        self.next_link().map(|link| format!("{}{}", self.base, link.href))
    }

    pub fn prev_request(&self) -> Option<Request> {
        self.prev_url().map(Request::get)
    }

    pub fn next_request(&self) -> Option<Request> {
        self.next_url().map(Request::get)
    }

    pub fn is_first_page(&self) -> bool {
        self.prev_link().is_none()
    }

    pub fn is_last_page(&self) -> bool {
        self.next_link().is_none()
    }
}

impl Client {
    /// Executes `first` and follows the `next` links until the last page.
    ///
    /// The stream ends after yielding the first error.
    pub fn pages<'a, P>(
        &'a self,
        first: Request,
    ) -> impl Stream<Item = Result<Resources<P>, LightroomError>> + 'a
    where
        P: DeserializeOwned + 'a,
    {
        try_stream! {
            let mut req = Some(first);
            while let Some(current) = req.take() {
                let page: Resources<P> = self.execute_json(&current).await?;
                req = page.next_request();
                trace!("Fetched page with {} resources, next: {:?}", page.resources.len(), req);
                yield page;
            }
        }
    }

    /// Same as [`Client::pages`] but yields the individual resources
    pub fn resources<'a, P>(
        &'a self,
        first: Request,
    ) -> impl Stream<Item = Result<Resource<P>, LightroomError>> + 'a
    where
        P: DeserializeOwned + 'a,
    {
        try_stream! {
            for await page in self.pages::<P>(first) {
                for item in page?.resources {
                    yield item;
                }
            }
        }
    }
}
