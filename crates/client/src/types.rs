//! Record types of the Mathesar RPC API.
//!
//! Generated by `mathesar generate`; do not edit by hand.

#![allow(missing_docs, clippy::derive_partial_eq_without_eq, clippy::struct_excessive_bools)]

use serde::{Deserialize, Serialize};

use crate::rpc::{absent_or_null, nullable};

/// A report with some statistics about the data accessible by Mathesar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// A unique ID for this Mathesar installation.
    #[serde(deserialize_with = "nullable")]
    pub installation_id: Option<String>,
    /// The version of Mathesar.
    pub mathesar_version: String,
    /// The number of configured users in Mathesar.
    pub user_count: i64,
    /// The number of users who have recently logged in.
    pub active_user_count: i64,
    /// The number of DB roles configured.
    pub configured_role_count: i64,
    /// The number of databases configured.
    pub connected_database_count: i64,
    /// The number of all schemas in
    /// all connected databases.
    pub connected_database_schema_count: i64,
    /// The total number of tables in
    /// all connected databasees.
    pub connected_database_table_count: i64,
    /// The total number of records in
    /// all connected databasees (approximated)
    pub connected_database_record_count: i64,
    /// The number of explorations.
    pub exploration_count: i64,
}

/// Returns the current state of analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsState {
    /// A boolean representing if analytics is enabled.
    pub enabled: bool,
}

/// Information about a collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorInfo {
    /// the Django ID of the UserDatabaseRoleMap model instance.
    pub id: i64,
    /// The Django ID of the User model instance of the collaborator.
    pub user_id: i64,
    /// the Django ID of the Database model instance for the collaborator.
    pub database_id: i64,
    /// The Django ID of the ConfiguredRole model instance for the collaborator.
    pub configured_role_id: i64,
}

/// Information needed to add a new PK column.
/// No keys are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatablePkColumnInfo {
    /// The name of the column.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// The type of the pk column on the database.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Option<String>>,
}

/// Options applied to a type. All attributes are optional.
/// Take special care with the difference between numeric and date/time
/// types w.r.t. precision. The attribute has a different meaning
/// depending on the type to which it’s being applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeOptions {
    /// For numeric types, the number of significant digits.
    /// For date/time types, the number of fractional digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<i64>,
    /// For numeric types, the number of fractional digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<i64>,
    /// Which time fields are stored. See Postgres docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// The maximum length of a character-type field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    /// The member type for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

/// A dictionary describing the default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefault {
    /// An SQL expression giving the default value.
    pub value: String,
    /// Whether the value is possibly dynamic.
    pub is_dynamic: bool,
}

/// Metadata for a column in a table.
/// Only the database, table_oid, and attnum keys are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetaDataRecord {
    /// The Django id of the database containing the table.
    pub database_id: i64,
    /// The OID of the table containing the column.
    pub table_oid: i64,
    /// The attnum of the column in the table.
    pub attnum: i64,
    /// How the input for a boolean column should be shown.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub bool_input: Option<Option<String>>,
    /// A string to display for true values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub bool_true: Option<Option<String>>,
    /// A string to display for false values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub bool_false: Option<Option<String>>,
    /// Minimum digits shown after the decimal point.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub num_min_frac_digits: Option<Option<i64>>,
    /// Maximum digits shown after the decimal point.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub num_max_frac_digits: Option<Option<i64>>,
    /// Specifies how grouping separators are displayed for numeric values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub num_grouping: Option<Option<String>>,
    /// Specifies the locale-specific format for displaying numeric values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub num_format: Option<Option<String>>,
    /// The currency symbol shown for money value.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub mon_currency_symbol: Option<Option<String>>,
    /// Where the currency symbol should be shown.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub mon_currency_location: Option<Option<String>>,
    /// A string representing the format of time values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub time_format: Option<Option<String>>,
    /// A string representing the format of date values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub date_format: Option<Option<String>>,
    /// The smallest unit for displaying durations.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<Option<String>>,
    /// The largest unit for displaying durations.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<Option<String>>,
    /// The pixel width of the column
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub display_width: Option<Option<i64>>,
}

/// The metadata fields which can be set for a column in a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetaDataBlob {
    /// The attnum of the column in the table.
    pub attnum: i64,
    /// How the input for a boolean column should be shown.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub bool_input: Option<Option<String>>,
    /// A string to display for true values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub bool_true: Option<Option<String>>,
    /// A string to display for false values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub bool_false: Option<Option<String>>,
    /// Minimum digits shown after the decimal point.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub num_min_frac_digits: Option<Option<i64>>,
    /// Maximum digits shown after the decimal point.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub num_max_frac_digits: Option<Option<i64>>,
    /// Specifies how grouping separators are displayed for numeric values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub num_grouping: Option<Option<String>>,
    /// Specifies the locale-specific format for displaying numeric values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub num_format: Option<Option<String>>,
    /// The currency symbol shown for money value.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub mon_currency_symbol: Option<Option<String>>,
    /// Where the currency symbol should be shown.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub mon_currency_location: Option<Option<String>>,
    /// A string representing the format of time values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub time_format: Option<Option<String>>,
    /// A string representing the format of date values.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub date_format: Option<Option<String>>,
    /// The smallest unit for displaying durations.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<Option<String>>,
    /// The largest unit for displaying durations.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<Option<String>>,
    /// The pixel width of the column
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub display_width: Option<Option<i64>>,
}

/// Information about a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredDatabaseInfo {
    /// the Django ID of the database model instance.
    pub id: i64,
    /// The name of the database on the server.
    pub name: String,
    /// the Django ID of the server model instance for the database.
    pub server_id: i64,
    /// The last version of the SQL scripts which
    /// were confirmed to have been run on this database.
    pub last_confirmed_sql_version: String,
    /// This is True if the SQL version isn’t the
    /// same as the service version.
    pub needs_upgrade_attention: bool,
    /// A optional user-configurable name for the database.
    #[serde(deserialize_with = "nullable")]
    pub nickname: Option<String>,
}

/// Information to be changed about a configured database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredDatabasePatch {
    /// The name of the database on the server.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// A optional user-configurable name for the database.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<Option<String>>,
}

/// Information about a foreign key constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyConstraint {
    /// The type of the constraint('f' for foreign key constraint).
    pub r#type: String,
    /// List of columns to set a foreign key on.
    pub columns: Vec<i64>,
    /// The OID of the referent table.
    pub fkey_relation_id: i64,
    /// List of referent column(s).
    pub fkey_columns: Vec<i64>,
    /// The name of the constraint.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// Whether to postpone constraint checking until the end of the transaction.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub deferrable: Option<Option<bool>>,
    /// Specifies what action should be taken when the referenced key is updated.
    /// Valid options include 'a'(no action)(default behavior), 'r'(restrict), 'c'(cascade), 'n'(set null), 'd'(set default)
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub fkey_update_action: Option<Option<String>>,
    /// Specifies what action should be taken when the referenced key is deleted.
    /// Valid options include 'a'(no action)(default behavior), 'r'(restrict), 'c'(cascade), 'n'(set null), 'd'(set default)
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub fkey_delete_action: Option<Option<String>>,
    /// Specifies how the foreign key matching should be performed.
    /// Valid options include 'f'(full match), 's'(simple match)(default behavior).
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub fkey_match_type: Option<Option<String>>,
}

/// Information about a primary key constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKeyConstraint {
    /// The type of the constraint('p' for primary key constraint).
    pub r#type: String,
    /// List of columns to set a primary key on.
    pub columns: Vec<i64>,
    /// The name of the constraint.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// Whether to postpone constraint checking until the end of the transaction.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub deferrable: Option<Option<bool>>,
}

/// Information about a unique constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueConstraint {
    /// The type of the constraint('u' for unique constraint).
    pub r#type: String,
    /// List of columns to set a unique constraint on.
    pub columns: Vec<i64>,
    /// The name of the constraint.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// Whether to postpone constraint checking until the end of the transaction.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub deferrable: Option<Option<bool>>,
}

/// An object defining a foreign key column in a mapping table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingColumn {
    /// The name of the foreign key column.
    pub column_name: String,
    /// The OID of the table the column references.
    pub referent_table_oid: i64,
}

/// Information about a table, created from column extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitTableInfo {
    /// The OID of the table that is created from column extraction.
    pub extracted_table_oid: i64,
    /// The attnum of the newly created foreign key column
    /// referring the extracted_table on the original table.
    pub new_fkey_attnum: i64,
}

/// Information about a database current user privileges on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    /// The oid of the database on the server.
    pub oid: i64,
    /// The name of the database on the server.
    pub name: String,
    /// The oid of the owner of the database.
    pub owner_oid: i64,
    /// A list of privileges available to the user.
    pub current_role_priv: Vec<String>,
    /// Whether the user is an owner of the database.
    pub current_role_owns: bool,
}

/// Information about database privileges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DBPrivileges {
    /// The oid of the role on the database server.
    pub role_oid: i64,
    /// A list of database privileges for the aforementioned role_oid.
    pub direct: Vec<String>,
}

/// Information about an exploration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationInfo {
    /// The Django id of an exploration.
    pub id: i64,
    /// The Django id of the database containing the exploration.
    pub database_id: i64,
    /// The name of the exploration.
    pub name: String,
    /// The OID of the base table of the exploration on the database.
    pub base_table_oid: i64,
    /// The OID of the schema containing the base table of the exploration.
    pub schema_oid: i64,
    /// A list describing the columns to be included in the exploration.
    pub initial_columns: Vec<serde_json::Value>,
    /// A list describing the transformations to be made on the included columns.
    #[serde(deserialize_with = "nullable")]
    pub transformations: Option<Vec<serde_json::Value>>,
    /// A list describing metadata for the columns in the explorations.
    #[serde(deserialize_with = "nullable")]
    pub display_options: Option<Vec<serde_json::Value>>,
    /// A map between the actual column names on the database and the alias to be displayed(if any).
    #[serde(deserialize_with = "nullable")]
    pub display_names: Option<serde_json::Map<String, serde_json::Value>>,
    /// The description of the exploration.
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
}

/// Definition about a runnable exploration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationDef {
    /// The Django id of the database containing the exploration.
    pub database_id: i64,
    /// The name of the exploration.
    pub name: String,
    /// The OID of the base table of the exploration on the database.
    pub base_table_oid: i64,
    /// The OID of the schema containing the base table of the exploration.
    pub schema_oid: i64,
    /// A list describing the columns to be included in the exploration.
    pub initial_columns: Vec<serde_json::Value>,
    /// A list describing the transformations to be made on the included columns.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub transformations: Option<Option<Vec<serde_json::Value>>>,
    /// A list describing metadata for the columns in the explorations.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub display_options: Option<Option<Vec<serde_json::Value>>>,
    /// A map between the actual column names on the database and the alias to be displayed(if any).
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub display_names: Option<Option<serde_json::Map<String, serde_json::Value>>>,
    /// The description of the exploration.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

/// Result of an exploration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationResult {
    /// A dict describing the exploration that ran.
    pub query: serde_json::Map<String, serde_json::Value>,
    /// A dict describing the total count of records along with the contents of those records.
    pub records: serde_json::Map<String, serde_json::Value>,
    /// A tuple describing the names of the columns included in the exploration.
    pub output_columns: Vec<serde_json::Value>,
    /// A dict describing the metadata applied to included columns.
    pub column_metadata: serde_json::Map<String, serde_json::Value>,
    /// Specifies the max number of rows returned.(default 100)
    #[serde(deserialize_with = "nullable")]
    pub limit: Option<i64>,
    /// Specifies the number of rows skipped.(default 0)
    #[serde(deserialize_with = "nullable")]
    pub offset: Option<i64>,
}

/// Record from a table, along with some meta data
/// The form of the object in the results array is determined by the
/// underlying records being listed. The keys of each object are the
/// attnums of the retrieved columns. The values are the value for the
/// given row, for the given column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordAdded {
    /// An array of a single record objects (the one added).
    pub results: Vec<serde_json::Map<String, serde_json::Value>>,
    /// Information for previewing foreign key
    /// values, provides a map of foreign key to a text summary.
    pub linked_record_summaries: std::collections::BTreeMap<String, std::collections::BTreeMap<String, String>>,
    /// Information for previewing an added record.
    pub record_summaries: std::collections::BTreeMap<String, String>,
}

/// An object defining an ORDER BY clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    /// The attnum of the column to order by.
    pub attnum: i64,
    /// The direction to order by.
    pub direction: String,
}

/// An object defining a filter to be used in a WHERE clause.
/// For valid type values, see the msar.filter_templates table
/// defined in mathesar/db/sql/05_msar.sql.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// a function or operator to be used in filtering.
    pub r#type: String,
    /// The ordered arguments for the function or operator.
    pub args: Vec<serde_json::Value>,
}

/// An object choosing a column for a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterAttnum {
    /// Must be "attnum"
    pub r#type: String,
    /// The attnum of the column to filter by
    pub value: i64,
}

/// An object defining a literal for an argument to a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterLiteral {
    /// must be "literal".
    pub r#type: String,
    /// The value of the literal.
    pub value: serde_json::Value,
}

/// Grouping definition.
/// The table involved must have a single column primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grouping {
    /// The columns to be grouped by.
    pub columns: Vec<i64>,
    /// The preprocessing functions to apply (if any).
    pub preproc: Vec<String>,
}

/// Group definition.
/// Note that the count is over all rows in the group, whether returned
/// or not. However, result_indices is restricted to only the rows
/// returned. This is to avoid potential problems if there are many rows
/// in the group (e.g., the whole table), but we only return a few.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// The id of the group. Consistent for same input.
    pub id: i64,
    /// The number of items in the group.
    pub count: i64,
    /// The value the results of the group equal.
    pub results_eq: Vec<serde_json::Map<String, serde_json::Value>>,
    /// The 0-indexed positions of group members in the
    /// results array.
    pub result_indices: Vec<i64>,
}

/// Grouping response object. Extends Grouping with actual groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupingResponse {
    /// The columns to be grouped by.
    pub columns: Vec<i64>,
    /// The preprocessing functions to apply (if any).
    pub preproc: Vec<String>,
    /// The groups applicable to the records being returned.
    pub groups: Vec<Group>,
}

/// Search definition for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParam {
    /// The attnum of the column in the table.
    pub attnum: i64,
    /// The literal to search for in the column.
    pub literal: serde_json::Value,
}

/// Information about a member role of a directly inherited role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMember {
    /// The OID of the member role.
    pub oid: i64,
    /// Whether the member role has ADMIN option on the inherited role.
    pub admin: bool,
}

/// Information about a role configured in Mathesar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredRoleInfo {
    /// the Django ID of the ConfiguredRole model instance.
    pub id: i64,
    /// The name of the role.
    pub name: String,
    /// The Django ID of the Server model instance for the role.
    pub server_id: i64,
}

/// Information about a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaInfo {
    /// The OID of the schema
    pub oid: i64,
    /// The name of the schema
    pub name: String,
    /// A description of the schema
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    /// The OID of the owner of the schema
    pub owner_oid: i64,
    /// All privileges available to the calling role
    /// on the schema.
    pub current_role_priv: Vec<String>,
    /// Whether the current role is the owner of the
    /// schema (even indirectly).
    pub current_role_owns: bool,
    /// The number of tables in the schema
    pub table_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaPatch {
    /// The name of the schema
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// A description of the schema
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

/// Information about schema privileges for a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaPrivileges {
    /// The oid of the role.
    pub role_oid: i64,
    /// A list of schema privileges for the aforementioned role_oid.
    pub direct: Vec<String>,
}

/// Information about a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableInfo {
    /// The oid of the table in the schema.
    pub oid: i64,
    /// The name of the table.
    pub name: String,
    /// The oid of the schema where the table lives.
    pub schema: i64,
    /// The description of the table.
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    /// The OID of the direct owner of the table.
    pub owner_oid: i64,
    /// The privileges available to the user on the table.
    pub current_role_priv: Vec<String>,
    /// Whether the current role owns the table.
    pub current_role_owns: bool,
}

/// Information about a newly created table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedTableInfo {
    /// The oid of the table in the schema.
    pub oid: i64,
    /// The name of the table.
    pub name: String,
    /// A dictionary giving the names of columns which
    /// were renamed due to collisions.
    #[serde(deserialize_with = "nullable")]
    pub renamed_columns: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Information about a singular joinable table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinableTableRecord {
    /// The OID of the table from which the paths start
    pub base: i64,
    /// The OID of the table where the paths end.
    pub target: i64,
    /// A list describing joinable paths in the following form:
    /// [
    /// [[L_oid0, L_attnum0], [R_oid0, R_attnum0]],
    /// [[L_oid1, L_attnum1], [R_oid1, R_attnum1]],
    /// [[L_oid2, L_attnum2], [R_oid2, R_attnum2]],
    /// …
    /// ]
    /// Here, [L_oidN, L_attnumN] represents the left column of a join, and [R_oidN, R_attnumN] the right.
    pub join_path: Vec<serde_json::Value>,
    /// Same as join_path expressed in terms of foreign key constraints in the following form:
    /// [
    /// [constraint_id0, reversed],
    /// [constraint_id1, reversed],
    /// ]
    /// In this form, constraint_idN is a foreign key constraint, and reversed is a boolean giving
    /// whether to travel from referrer to referent (when False) or from referent to referrer (when True).
    pub fkey_path: Vec<serde_json::Value>,
    /// Specifies how far to search for joinable tables.
    pub depth: i64,
    /// Specifies whether the path included is reversed.
    pub multiple_results: bool,
}

/// Information about joinable table(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinableTableInfo {
    /// List of reachable joinable table(s) from a base table.
    pub joinable_tables: Vec<JoinableTableRecord>,
    /// Additional info about target table(s) and its column(s).
    pub target_table_info: Vec<serde_json::Value>,
}

/// The metadata fields which can be set on a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetaDataBlob {
    /// Specifies the DataFile model id used for the import.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub data_file_id: Option<Option<i64>>,
    /// Specifies whether a file has been successfully imported into a table.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub import_verified: Option<Option<bool>>,
    /// The order in which columns of a table are displayed.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub column_order: Option<Option<Vec<i64>>>,
    /// The record summary template
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub record_summary_template: Option<Option<std::collections::BTreeMap<String, serde_json::Value>>>,
    /// The attnum of the most recently-set pkey column.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub mathesar_added_pkey_attnum: Option<Option<i64>>,
}

/// Metadata for a table in a database.
/// Only the database and table_oid keys are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetaDataRecord {
    /// The Django id of the TableMetaData object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The Django id of the database containing the table.
    pub database_id: i64,
    /// The OID of the table in the database.
    pub table_oid: i64,
    /// Specifies the DataFile model id used for the import.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub data_file_id: Option<Option<i64>>,
    /// Specifies whether a file has been successfully imported into a table.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub import_verified: Option<Option<bool>>,
    /// The order in which columns of a table are displayed.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub column_order: Option<Option<Vec<i64>>>,
    /// The record summary template.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub record_summary_template: Option<Option<std::collections::BTreeMap<String, serde_json::Value>>>,
    /// The attnum of the most recently-set pkey column.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub mathesar_added_pkey_attnum: Option<Option<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePrivileges {
    /// The oid of the role.
    pub role_oid: serde_json::Value,
    /// A list of table privileges for the aforementioned role_oid.
    pub direct: serde_json::Value,
}

/// Information about a mathesar user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// The Django id of the user.
    pub id: i64,
    /// The username of the user.
    pub username: String,
    /// Specifies whether the user is a superuser.
    pub is_superuser: bool,
    /// The email of the user.
    pub email: String,
    /// The full name of the user.
    pub full_name: String,
    /// Specifies the display language for the user, can be either en or ja.
    pub display_language: String,
}

/// Definition for creating a mathesar user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDef {
    /// The username of the user.
    pub username: String,
    /// The password of the user.
    pub password: String,
    /// Whether the user is a superuser.
    pub is_superuser: bool,
    /// The email of the user.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    /// The full name of the user.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Option<String>>,
    /// Specifies the display language for the user, can be set to either en or ja.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub display_language: Option<Option<String>>,
}

/// Information about a column. Extends the settable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// The attnum of the column in the table.
    pub id: i64,
    /// The name of the column.
    pub name: String,
    /// The type of the column on the database.
    pub r#type: String,
    /// The options applied to the column type.
    pub type_options: TypeOptions,
    /// Whether or not the column is nullable.
    pub nullable: bool,
    /// Whether the column is in the primary key.
    pub primary_key: bool,
    /// The default value and whether it’s dynamic.
    pub default: ColumnDefault,
    /// Whether the column has dependent objects.
    pub has_dependents: bool,
    /// The description of the column.
    pub description: String,
    /// The privileges available to the user for the column.
    pub current_role_priv: Vec<String>,
}

/// Information needed to add a new column.
/// No keys are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatableColumnInfo {
    /// The name of the column.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// The type of the column on the database.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Option<String>>,
    /// The options applied to the column type.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub type_options: Option<Option<TypeOptions>>,
    /// Whether or not the column is nullable.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub nullable: Option<Option<bool>>,
    /// The default value.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub default: Option<Option<ColumnDefault>>,
    /// The description of the column.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

/// Information needed to preview a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewableColumnInfo {
    /// The attnum of the column in the table.
    pub id: i64,
    /// The new type to be applied to a column.
    #[serde(deserialize_with = "nullable")]
    pub r#type: Option<String>,
    /// The options to be applied to the column type.
    #[serde(deserialize_with = "nullable")]
    pub type_options: Option<TypeOptions>,
}

/// Information about a column, restricted to settable fields.
/// When possible, Passing null for a key will clear the underlying
/// setting. E.g.,
/// default = null clears the column default setting.
/// type_options = null clears the type options for the column.
/// description = null clears the column description.
/// Setting any of name, type, or nullable is a noop.
/// Only the id key is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettableColumnInfo {
    /// The attnum of the column in the table.
    pub id: i64,
    /// The name of the column.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// The type of the column on the database.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Option<String>>,
    /// The options applied to the column type.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub type_options: Option<Option<TypeOptions>>,
    /// Whether or not the column is nullable.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub nullable: Option<Option<bool>>,
    /// The default value.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub default: Option<Option<ColumnDefault>>,
    /// The description of the column.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

/// Info about the objects resulting from calling the setup functions.
/// These functions will get or create an instance of the Server,
/// Database, and ConfiguredRole models, as well as a UserDatabaseRoleMap entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConnectionResult {
    /// Information on the Server model instance.
    pub server: serde_json::Value,
    /// Information on the Database model instance.
    pub database: ConfiguredDatabaseInfo,
    /// Information on the ConfiguredRole model instance.
    pub configured_role: ConfiguredRoleInfo,
}

/// Records from a table, along with some meta data
/// The form of the objects in the results array is determined by the
/// underlying records being listed. The keys of each object are the
/// attnums of the retrieved columns. The values are the value for the
/// given row, for the given column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordList {
    /// The total number of records in the table.
    pub count: i64,
    /// An array of record objects.
    pub results: Vec<serde_json::Map<String, serde_json::Value>>,
    /// Information for displaying grouped records.
    pub grouping: GroupingResponse,
    /// Information for previewing foreign key
    /// values, provides a map of foreign key to a text summary.
    pub linked_record_smmaries: GroupingResponse,
    /// Information for previewing returned records.
    pub record_summaries: std::collections::BTreeMap<String, String>,
}

/// Information about a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleInfo {
    /// The OID of the role.
    pub oid: i64,
    /// Name of the role.
    pub name: String,
    /// Whether the role has SUPERUSER status.
    #[serde(rename = "super")]
    pub super_: bool,
    /// Whether the role has INHERIT attribute.
    pub inherits: bool,
    /// Whether the role has CREATEROLE attribute.
    pub create_role: bool,
    /// Whether the role has CREATEDB attribute.
    pub create_db: bool,
    /// Whether the role has LOGIN attribute.
    pub login: bool,
    /// A description of the role
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    /// The member roles that directly inherit the role.
    #[serde(deserialize_with = "nullable")]
    pub members: Option<Vec<RoleMember>>,
}

/// Information about a table, restricted to settable fields.
/// When possible, Passing null for a key will clear the underlying
/// setting. E.g.,
/// description = null clears the table description.
/// Setting any of name, columns to null is a noop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettableTableInfo {
    /// The new name of the table.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// The description of the table.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    /// A list describing desired column alterations.
    #[serde(default, deserialize_with = "absent_or_null", skip_serializing_if = "Option::is_none")]
    pub columns: Option<Option<Vec<SettableColumnInfo>>>,
}

pub type CreatableConstraintInfo = Vec<serde_json::Value>;
