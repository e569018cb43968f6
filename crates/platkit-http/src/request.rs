use std::fmt;

use crate::Headers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A single HTTP call, built fresh for every invocation and never persisted.
///
/// # Examples
///
/// ```
/// use platkit_http::{Method, Request};
///
/// let request = Request::post("https://api.example.com/channels/42")
///     .header("Client-Id", "abc")
///     .json(serde_json::json!({ "title": "live" }));
/// assert_eq!(request.method, Method::Post);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Request {
    pub url:     String,
    pub method:  Method,
    pub headers: Headers,
    pub body:    Option<serde_json::Value>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self { Self::new(Method::Get, url) }

    pub fn post(url: impl Into<String>) -> Self { Self::new(Method::Post, url) }

    pub fn put(url: impl Into<String>) -> Self { Self::new(Method::Put, url) }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}
