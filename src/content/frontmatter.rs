//! Front-matter parsing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{ContentError, Post};
use crate::helpers::parse_date_string;
use crate::transform::create_slug;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter of a post file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Explicit slug; generated from the title when absent
    pub slug: Option<String>,
    pub date: Option<String>,
    pub updated: Option<String>,
    pub published: bool,
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub categories: Vec<String>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            slug: None,
            date: None,
            updated: None,
            published: true,
            excerpt: None,
            tags: Vec::new(),
            categories: Vec::new(),
        }
    }
}

impl FrontMatter {
    /// Split a post file into front-matter and body
    ///
    /// Front-matter is only recognised when the very first line is `---`;
    /// anything else is returned whole as the body.
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.trim_start_matches('\u{feff}');

        let Some(rest) = content.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let Some(rest) = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
        else {
            return Ok((FrontMatter::default(), content));
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == "---" {
                let yaml = &rest[..offset];
                let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);

                if yaml.trim().is_empty() {
                    return Ok((FrontMatter::default(), body));
                }

                let fm: FrontMatter = serde_yaml::from_str(yaml)?;
                return Ok((fm, body));
            }
            offset += line.len();
        }

        Err(ContentError::UnterminatedFrontMatter)
    }

    /// Parse the date field
    pub fn parse_date(&self) -> Result<Option<DateTime<Utc>>, ContentError> {
        parse_field("date", self.date.as_deref())
    }

    /// Parse the updated field
    pub fn parse_updated(&self) -> Result<Option<DateTime<Utc>>, ContentError> {
        parse_field("updated", self.updated.as_deref())
    }

    /// Build a post from this front-matter and the file body
    ///
    /// Missing dates fall back to the `Post` defaults (now), a missing slug
    /// is generated from the title.
    pub fn into_post(self, body: &str, slug_max_length: usize) -> Result<Post, ContentError> {
        let date = self.parse_date()?;
        let updated = self.parse_updated()?;

        let mut post = Post::default();
        if let Some(id) = self.id {
            post.id = id;
        }
        post.title = self.title.unwrap_or_default();
        post.slug = match self.slug {
            Some(slug) => slug,
            None => create_slug(post.title.as_str(), slug_max_length),
        };
        post.content = body.to_string();
        post.excerpt = self.excerpt.unwrap_or_default();
        if let Some(date) = date {
            post.pub_date = date;
        }
        post.last_modified = updated.unwrap_or(post.pub_date);
        post.is_published = self.published;
        post.tags = self.tags;
        post.categories = self.categories;

        Ok(post)
    }
}

fn parse_field(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ContentError> {
    match value {
        None => Ok(None),
        Some(value) => parse_date_string(value)
            .map(Some)
            .ok_or_else(|| ContentError::InvalidDate {
                field,
                value: value.to_string(),
            }),
    }
}
