//! Ownership report stream.

use futures::stream::{self, Stream, StreamExt};
use tessera_store::repository::OwnershipInfoRepository;
use tessera_store::{Filter, StoreError};

use crate::format::{csv_header, ReportFormat, ReportRecord};
use crate::Result;

/// Build a lazy stream of serialized ownership records matching `conditions`.
///
/// CSV output is preceded by a header line. Items after an `Err` are
/// unspecified; consumers stop at the first error.
pub async fn ownership_report(
    repository: &OwnershipInfoRepository,
    conditions: &Filter,
    format: ReportFormat,
) -> Result<impl Stream<Item = Result<String>>> {
    let cursor = repository.find_cursor(conditions).await?;

    let header = match format {
        ReportFormat::Csv => Some(Ok(csv_header())),
        ReportFormat::JsonLines => None,
    };

    let body = cursor.map(move |item| match item {
        Ok(info) => ReportRecord::from(&info).serialize_line(format),
        Err(e) => Err(StoreError::from(e).into()),
    });

    Ok(stream::iter(header).chain(body))
}
