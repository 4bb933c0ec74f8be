//! Column removal and schema reconciliation
//!
//! Columns are matched case-insensitively, the way dataframe engines resolve
//! names by default. Dropping a column that is not present is a no-op.

use crate::error::Result;
use arrow::datatypes::{Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Indices of the columns that survive dropping `column`
///
/// Returns `None` when no field matches.
pub fn retained_columns(schema: &Schema, column: &str) -> Option<Vec<usize>> {
    let target = column.to_lowercase();
    let keep: Vec<usize> = schema
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, field)| field.name().to_lowercase() != target)
        .map(|(idx, _)| idx)
        .collect();

    (keep.len() != schema.fields().len()).then_some(keep)
}

/// Schema with every field matching `column` removed
pub fn drop_column_from_schema(schema: &SchemaRef, column: &str) -> Result<SchemaRef> {
    match retained_columns(schema, column) {
        Some(keep) => Ok(Arc::new(schema.project(&keep)?)),
        None => Ok(schema.clone()),
    }
}

/// Batch with every column matching `column` removed; row count is unchanged
pub fn drop_column(batch: &RecordBatch, column: &str) -> Result<RecordBatch> {
    match retained_columns(&batch.schema(), column) {
        Some(keep) => Ok(batch.project(&keep)?),
        None => Ok(batch.clone()),
    }
}

/// Common schema of two part files
///
/// Names and types must match position by position. A field is nullable
/// when either side allows nulls. Returns `None` on any other difference.
pub fn unify_schemas(current: &Schema, next: &Schema) -> Option<Schema> {
    if current.fields().len() != next.fields().len() {
        return None;
    }

    let fields = current
        .fields()
        .iter()
        .zip(next.fields().iter())
        .map(|(a, b)| {
            (a.name() == b.name() && a.data_type() == b.data_type()).then(|| {
                Field::clone(a).with_nullable(a.is_nullable() || b.is_nullable())
            })
        })
        .collect::<Option<Vec<_>>>()?;

    Some(Schema::new_with_metadata(fields, current.metadata().clone()))
}

/// Rebind a batch to the unified schema
pub fn conform_batch(batch: &RecordBatch, schema: &SchemaRef) -> Result<RecordBatch> {
    if batch.schema().fields() == schema.fields() {
        return Ok(batch.clone());
    }
    Ok(RecordBatch::try_new(schema.clone(), batch.columns().to_vec())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field};
    use pretty_assertions::assert_eq;

    fn sample_batch() -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("Id", DataType::Utf8, false),
            Field::new("No_of_demo_calls__c", DataType::Int64, true),
            Field::new("Name", DataType::Utf8, true),
        ]));
        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["a1", "a2", "a3"])),
                Arc::new(Int64Array::from(vec![Some(1), None, Some(3)])),
                Arc::new(StringArray::from(vec![Some("x"), Some("y"), None])),
            ],
        )
        .unwrap()
    }

    fn names(batch: &RecordBatch) -> Vec<String> {
        batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    #[test]
    fn test_drop_column_removes_field_keeps_rows() {
        let batch = sample_batch();
        let out = drop_column(&batch, "No_of_demo_calls__c").unwrap();

        assert_eq!(names(&out), vec!["Id", "Name"]);
        assert_eq!(out.num_rows(), batch.num_rows());
        assert_eq!(out.column(0).as_ref(), batch.column(0).as_ref());
        assert_eq!(out.column(1).as_ref(), batch.column(2).as_ref());
    }

    #[test]
    fn test_drop_absent_column_is_noop() {
        let batch = sample_batch();
        let out = drop_column(&batch, "Planned_DCR__c").unwrap();
        assert_eq!(out, batch);
    }

    #[test]
    fn test_drop_column_case_insensitive() {
        let out = drop_column(&sample_batch(), "no_of_DEMO_calls__C").unwrap();
        assert_eq!(names(&out), vec!["Id", "Name"]);
    }

    #[test]
    fn test_drop_last_remaining_columns_keeps_row_count() {
        let schema = Arc::new(Schema::new(vec![Field::new("only", DataType::Int64, true)]));
        let batch =
            RecordBatch::try_new(schema, vec![Arc::new(Int64Array::from(vec![1, 2]))]).unwrap();

        let out = drop_column(&batch, "only").unwrap();
        assert_eq!(out.num_columns(), 0);
        assert_eq!(out.num_rows(), 2);
    }

    #[test]
    fn test_drop_column_from_schema() {
        let schema = sample_batch().schema();
        let out = drop_column_from_schema(&schema, "name").unwrap();
        let fields: Vec<_> = out.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(fields, vec!["Id", "No_of_demo_calls__c"]);

        let untouched = drop_column_from_schema(&schema, "missing").unwrap();
        assert_eq!(untouched, schema);
    }

    #[test]
    fn test_retained_columns() {
        let schema = sample_batch().schema();
        assert_eq!(retained_columns(&schema, "Id"), Some(vec![1, 2]));
        assert_eq!(retained_columns(&schema, "nope"), None);
    }

    #[test]
    fn test_unify_widens_nullability() {
        let strict = Schema::new(vec![Field::new("Id", DataType::Utf8, false)]);
        let loose = Schema::new(vec![Field::new("Id", DataType::Utf8, true)]);

        let unified = unify_schemas(&strict, &loose).unwrap();
        assert!(unified.field(0).is_nullable());
        assert_eq!(unify_schemas(&strict, &strict).unwrap(), strict);
    }

    #[test]
    fn test_unify_rejects_name_or_type_conflicts() {
        let base = Schema::new(vec![Field::new("Id", DataType::Utf8, true)]);
        let renamed = Schema::new(vec![Field::new("Key", DataType::Utf8, true)]);
        let retyped = Schema::new(vec![Field::new("Id", DataType::Int64, true)]);
        let wider = Schema::new(vec![
            Field::new("Id", DataType::Utf8, true),
            Field::new("Extra", DataType::Utf8, true),
        ]);

        assert!(unify_schemas(&base, &renamed).is_none());
        assert!(unify_schemas(&base, &retyped).is_none());
        assert!(unify_schemas(&base, &wider).is_none());
    }

    #[test]
    fn test_conform_batch_to_nullable_schema() {
        let batch = sample_batch();
        let loose = Arc::new(unify_schemas(&batch.schema(), &batch.schema()).unwrap());
        assert_eq!(conform_batch(&batch, &loose).unwrap(), batch);

        let fields: Vec<Field> = batch
            .schema()
            .fields()
            .iter()
            .map(|f| Field::clone(f).with_nullable(true))
            .collect();
        let widened = Arc::new(Schema::new(fields));
        let out = conform_batch(&batch, &widened).unwrap();
        assert_eq!(out.schema(), widened);
        assert_eq!(out.num_rows(), batch.num_rows());
    }
}
