use crate::scan::RowScanner;
use crate::{HistoryError, Row};
use crossbeam_channel::{bounded, Receiver, Sender};
use rusqlite::Connection;
use std::thread::{self, JoinHandle};

/// Rows buffered ahead of the consumer before the producer blocks.
///
/// The channel allocates every slot up front, so each read reserves this
/// many `Result<Row, HistoryError>` slots regardless of table size.
pub const ROW_BUFFER_CAPACITY: usize = 100_000;

type RowResult = Result<Row, HistoryError>;

/// Completion report of a finished producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadSummary {
    pub rows_read: usize,
}

/// Rows of a running query, in cursor order.
///
/// Yields every successfully scanned row, then at most one error as the
/// final item. Iteration ends once the producer has released its cursor.
pub struct RowStream {
    rows: Receiver<RowResult>,
    producer: Option<JoinHandle<ReadSummary>>,
}

impl RowStream {
    /// Waits for the producer and returns its summary.
    ///
    /// Dropping the remaining rows is allowed: the producer stops at its
    /// next send once the receiving side is gone.
    pub fn finish(mut self) -> Result<ReadSummary, HistoryError> {
        let producer = self.producer.take();
        drop(self);
        match producer {
            Some(handle) => handle.join().map_err(|_| HistoryError::ProducerPanicked),
            None => Err(HistoryError::ProducerPanicked),
        }
    }

    /// Drains the stream. Returns the first error if one was published,
    /// otherwise every row.
    pub fn collect_rows(mut self) -> Result<Vec<Row>, HistoryError> {
        let mut rows = Vec::new();
        let mut failure = None;
        for next in self.by_ref() {
            match next {
                Ok(row) => rows.push(row),
                Err(err) => {
                    failure = Some(err);
                    break;
                }
            }
        }
        let finished = self.finish();
        if let Some(err) = failure {
            return Err(err);
        }
        finished?;
        Ok(rows)
    }
}

impl Iterator for RowStream {
    type Item = RowResult;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.recv().ok()
    }
}

/// Runs `query` on a dedicated thread that takes ownership of `conn`.
///
/// Returns once the query has been prepared and opened; an unopenable
/// query is reported as [`HistoryError::QueryOpen`] and no stream is
/// created.
pub fn read_rows<S: RowScanner>(
    conn: Connection,
    query: &str,
    scan: S,
) -> Result<RowStream, HistoryError> {
    let (ready_tx, ready_rx) = bounded::<Result<(), HistoryError>>(1);
    let (row_tx, row_rx) = bounded::<RowResult>(ROW_BUFFER_CAPACITY);
    let query = query.to_string();

    let producer = thread::Builder::new()
        .name("mole-reader".to_string())
        .spawn(move || produce(conn, query, scan, ready_tx, row_tx))
        .map_err(HistoryError::Spawn)?;

    match ready_rx.recv() {
        Ok(Ok(())) => Ok(RowStream {
            rows: row_rx,
            producer: Some(producer),
        }),
        Ok(Err(err)) => {
            let _ = producer.join();
            Err(err)
        }
        Err(_) => {
            let _ = producer.join();
            Err(HistoryError::ProducerPanicked)
        }
    }
}

fn produce<S: RowScanner>(
    conn: Connection,
    query: String,
    scan: S,
    ready: Sender<Result<(), HistoryError>>,
    out: Sender<RowResult>,
) -> ReadSummary {
    let mut rows_read = 0;
    {
        let mut stmt = match conn.prepare(&query) {
            Ok(stmt) => stmt,
            Err(source) => {
                let _ = ready.send(Err(HistoryError::QueryOpen { query, source }));
                return ReadSummary { rows_read };
            }
        };
        let mut cursor = match stmt.query([]) {
            Ok(cursor) => cursor,
            Err(source) => {
                let _ = ready.send(Err(HistoryError::QueryOpen { query, source }));
                return ReadSummary { rows_read };
            }
        };
        let _ = ready.send(Ok(()));
        tracing::debug!(%query, "query opened");

        loop {
            let next = match cursor.next() {
                Ok(Some(row)) => scan(row),
                Ok(None) => break,
                Err(source) => Err(HistoryError::Cursor(source)),
            };
            match next {
                Ok(row) => {
                    if out.send(Ok(row)).is_err() {
                        tracing::debug!(rows_read, "row consumer hung up");
                        break;
                    }
                    rows_read += 1;
                }
                Err(err) => {
                    tracing::debug!(rows_read, error = %err, "stopping read on first error");
                    let _ = out.send(Err(err));
                    break;
                }
            }
        }
    }
    // cursor and statement are released before the stream closes
    drop(out);
    tracing::debug!(rows_read, "reader finished");
    ReadSummary { rows_read }
}
