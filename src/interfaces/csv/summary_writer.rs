use crate::domain::order::OrderSnapshot;
use crate::error::Result;
use std::io::Write;

/// Writes the settled order state as CSV: one row per line item followed by
/// a `total` record.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new().flexible(true).from_writer(sink);
        Self { writer }
    }

    pub fn write_snapshot(&mut self, snapshot: &OrderSnapshot) -> Result<()> {
        self.writer
            .write_record(["item", "price", "quantity", "subtotal"])?;
        for line in &snapshot.lines {
            self.writer.write_record([
                line.item.as_str(),
                &line.price.to_string(),
                &line.quantity.to_string(),
                &line.subtotal.to_string(),
            ])?;
        }
        self.writer
            .write_record(["total", "", "", &snapshot.total.to_string()])?;
        self.writer.flush()?;
        Ok(())
    }
}
