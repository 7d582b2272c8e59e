//! The walkthrough itself.
//!
//! Every step appends a line to the [`Report`] and emits a tracing event, so
//! the binary prints a readable transcript while logs stay structured.

use anyhow::{Context, bail};
use uuid::Uuid;

use valrec_codec::round_trip;
use valrec_core::record::equals;
use valrec_core::{DomainError, Fields, Record};
use valrec_records::{Person, Point2D, customer};

use crate::config::DemoConfig;

/// Transcript of a walkthrough run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
}

impl Report {
    fn push(&mut self, step: &str, line: impl Into<String>) {
        let line = line.into();
        tracing::info!(step, "{line}");
        self.lines.push(line);
    }
}

pub fn run(config: &DemoConfig) -> anyhow::Result<Report> {
    let mut report = Report::default();

    // Named construction and non-destructive copies.
    let dave = Person::construct(Fields::new().with("name", "Dave").with("age", 42))
        .context("constructing Dave")?;
    report.push("construct", format!("immutable person: {dave}"));

    let ellen = dave.copy_with(Fields::new().with("name", "Ellen"))?;
    report.push("copy", format!("copy with name: {ellen}"));

    let frank = dave.copy_with(Fields::new().with("name", "Frank").with("age", 66))?;
    report.push("copy", format!("copy with name and age: {frank}"));
    report.push("copy", format!("original unchanged: {dave}"));

    let parsed: Person = "Al Lansley:45".parse()?;
    report.push("parse", format!("parsed from `name:age`: {parsed}"));

    // Structural versus identity equality.
    let p1 = Point2D::by(1, 2);
    let p2 = Point2D::by(1, 2);
    report.push(
        "equality",
        format!(
            "p1 == p2: {}, same instance: {}, hashes match: {}",
            p1 == p2,
            core::ptr::eq(&p1, &p2),
            p1.structural_hash() == p2.structural_hash()
        ),
    );
    report.push(
        "equality",
        format!("person equals point: {}", equals(&dave, &p1)),
    );

    // Defaults and factories.
    let origin = Point2D::construct(Fields::new())?;
    report.push("defaults", format!("all defaults: {origin}"));

    let sarah = customer::create_with_id("Sarah", Uuid::from_u64_pair(10, 15))?;
    report.push("factory", format!("customer with fixed id: {sarah}"));

    let chris = customer::create_with_discount("Chris", None, 50.0)?;
    report.push(
        "factory",
        format!("discounted customer: {} at {}%", chris.name(), chris.discount()),
    );

    // Rejected input produces no instance.
    match Person::construct(Fields::new().with("name", "Nobody")) {
        Err(err @ DomainError::Arity { .. }) => report.push("errors", format!("rejected: {err}")),
        other => bail!("expected an arity error, got {other:?}"),
    }
    match dave.copy_with(Fields::new().with("email", "dave@example.com")) {
        Err(err @ DomainError::UnknownField { .. }) => {
            report.push("errors", format!("rejected: {err}"))
        }
        other => bail!("expected an unknown-field error, got {other:?}"),
    }

    // Transmit and receive through the configured codec.
    let outcome = round_trip(&config.codec, &parsed)
        .with_context(|| format!("round trip through {:?}", config.codec))?;
    report.push(
        "codec",
        format!(
            "[OK] {} bytes via {}: transmitted and received data is identical ({})",
            outcome.encoded_len, outcome.codec, outcome.decoded
        ),
    );

    Ok(report)
}
