//! Typed Mathesar RPC method stubs.
//!
//! Generated by `mathesar generate`; do not edit by hand.

#![allow(clippy::too_many_arguments, clippy::wildcard_imports)]

use crate::error::ClientResult;
use crate::rpc::Params;
use crate::types::*;
use crate::wrappers::Mathesar;

impl Mathesar {
    /// :return: A boolean to identify if analytics is enabled.
    pub async fn analytics_get_state(&self) -> ClientResult<AnalyticsState> {
        let params = Params::new();
        self.call_typed("analytics.get_state", params).await
    }

    /// Initialize analytics collection and reporting in Mathesar
    /// If initialized, analytics are gathered to a local model once per day,
    /// and uploaded.
    pub async fn analytics_initialize(&self) -> ClientResult<serde_json::Value> {
        let params = Params::new();
        self.call("analytics.initialize", params).await
    }

    /// Disable analytics collection and reporting in Mathesar
    /// Disabling analytics amounts to (for now) simply deleting the
    /// Installation ID, ensuring that it’s impossible to save analytics
    /// reports. Any reports currently saved are removed when the
    /// Installation ID is deleted.
    pub async fn analytics_disable(&self) -> ClientResult<serde_json::Value> {
        let params = Params::new();
        self.call("analytics.disable", params).await
    }

    /// View an example analytics report, prepared with the same function
    /// that creates real reports that would be saved and uploaded.
    ///
    /// :return: An analytics report.
    pub async fn analytics_view_report(&self) -> ClientResult<AnalyticsReport> {
        let params = Params::new();
        self.call_typed("analytics.view_report", params).await
    }

    /// Upload a feedback message to Mathesar’s servers.
    ///
    /// :param message: The feedback message to send.
    pub async fn analytics_upload_feedback(&self, message: String) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("message", message)?;
        self.call("analytics.upload_feedback", params).await
    }

    /// List information about collaborators. Exposed as list.
    /// If called with no database_id, all collaborators for all databases are listed.
    ///
    /// :param database_id: The Django id of the database associated with the collaborators.
    /// :return: A list of collaborators.
    pub async fn collaborators_list(&self, database_id: Option<i64>) -> ClientResult<Vec<CollaboratorInfo>> {
        let params = Params::new()
            .opt("database_id", database_id)?;
        self.call_typed("collaborators.list", params).await
    }

    /// Set up a new collaborator for a database.
    ///
    /// :param database_id: The Django id of the Database to associate with the collaborator.
    /// :param user_id: The Django id of the User model instance who’d be the collaborator.
    /// :param configured_role_id: The Django id of the ConfiguredRole model instance to associate with the collaborator.
    pub async fn collaborators_add(&self, database_id: i64, user_id: i64, configured_role_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("database_id", database_id)?
            .arg("user_id", user_id)?
            .arg("configured_role_id", configured_role_id)?;
        self.call("collaborators.add", params).await
    }

    /// Delete a collaborator from a database.
    ///
    /// :param collaborator_id: The Django id of the UserDatabaseRoleMap model instance of the collaborator.
    pub async fn collaborators_delete(&self, collaborator_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("collaborator_id", collaborator_id)?;
        self.call("collaborators.delete", params).await
    }

    /// Set the role of a collaborator for a database.
    ///
    /// :param collaborator_id: The Django id of the UserDatabaseRoleMap model instance of the collaborator.
    /// :param configured_role_id: The Django id of the ConfiguredRole model instance to associate with the collaborator.
    pub async fn collaborators_set_role(&self, collaborator_id: i64, configured_role_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("collaborator_id", collaborator_id)?
            .arg("configured_role_id", configured_role_id)?;
        self.call("collaborators.set_role", params).await
    }

    /// List information about columns for a table. Exposed as list.
    ///
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: A list of column details.
    pub async fn columns_list(&self, table_oid: i64, database_id: i64) -> ClientResult<Vec<ColumnInfo>> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("columns.list", params).await
    }

    /// Add columns to a table.
    /// There are defaults for both the name and type of a column, and so
    /// passing [{}] for column_data_list would add a single column of
    /// type CHARACTER VARYING, with an auto-generated name.
    ///
    /// :param column_data_list: A list describing desired columns to add.
    /// :param table_oid: Identity of the table to which we’ll add columns.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: An array of the attnums of the new columns.
    pub async fn columns_add(&self, column_data_list: Vec<CreatableColumnInfo>, table_oid: i64, database_id: i64) -> ClientResult<Vec<i64>> {
        let params = Params::new()
            .arg("column_data_list", column_data_list)?
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("columns.add", params).await
    }

    /// Add a primary key column to a table of a predefined type.
    /// The column will be added, set as the primary key, and also filled
    /// for each preexisting row, using the default generating function or
    /// method associated with the given pkey_type.
    /// If there is a name collision for the new primary key column, we
    /// automatically generate a non-colliding name for the new primary key
    /// column, and leave the existing table column names as they are.
    /// Primary key types
    /// - ‘UUIDv4’: This results in a uuid primary key column, with
    ///     default values generated by the get_random_uuid() function
    ///     provided by PostgreSQL. This amounts to UUIDv4 uuid definitions.
    /// - ‘IDENTITY’: This results in an integer primary key column with
    ///     default values created via an identity sequence, i.e., using
    ///     GENERATED BY DEFAULT AS IDENTITY.
    ///
    /// :param pkey_type: Defines the type and default of the primary key.
    /// :param table_oid: The OID of the table getting a primary key.
    /// :param database_id: The Django id of the database containing the table.
    /// :param drop_existing_pkey_column: Whether to drop the old pkey column.
    /// :param name: A custom name for the added primary key column.
    pub async fn columns_add_primary_key_column(&self, pkey_type: String, table_oid: i64, database_id: i64, drop_existing_pkey_column: Option<bool>, name: Option<String>) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("pkey_type", pkey_type)?
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?
            .opt("drop_existing_pkey_column", drop_existing_pkey_column)?
            .opt("name", name)?;
        self.call("columns.add_primary_key_column", params).await
    }

    /// Alter details of preexisting columns in a table.
    /// Does not support altering the type or type options of array columns.
    ///
    /// :param column_data_list: A list describing desired column alterations.
    /// :param table_oid: Identity of the table whose columns we’ll modify.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: The number of columns altered.
    pub async fn columns_patch(&self, column_data_list: Vec<SettableColumnInfo>, table_oid: i64, database_id: i64) -> ClientResult<i64> {
        let params = Params::new()
            .arg("column_data_list", column_data_list)?
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("columns.patch", params).await
    }

    /// Delete columns from a table.
    ///
    /// :param column_attnums: A list of attnums of columns to delete.
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: The number of columns dropped.
    pub async fn columns_delete(&self, column_attnums: Vec<i64>, table_oid: i64, database_id: i64) -> ClientResult<i64> {
        let params = Params::new()
            .arg("column_attnums", column_attnums)?
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("columns.delete", params).await
    }

    /// List information about columns for a table, along with the metadata associated with each column.
    ///
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: A list of column details.
    pub async fn columns_list_with_metadata(&self, table_oid: i64, database_id: i64) -> ClientResult<Vec<serde_json::Value>> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("columns.list_with_metadata", params).await
    }

    /// List metadata associated with columns for a table. Exposed as list.
    ///
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: A list of column meta data objects.
    pub async fn columns_metadata_list(&self, table_oid: i64, database_id: i64) -> ClientResult<Vec<ColumnMetaDataRecord>> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("columns.metadata.list", params).await
    }

    /// Set metadata associated with columns of a table for a database. Exposed as set.
    ///
    /// :param column_meta_data_list: A list describing desired metadata alterations.
    /// :param table_oid: Identity of the table whose metadata we’ll modify.
    /// :param database_id: The Django id of the database containing the table.
    pub async fn columns_metadata_set(&self, column_meta_data_list: Vec<ColumnMetaDataBlob>, table_oid: i64, database_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("column_meta_data_list", column_meta_data_list)?
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call("columns.metadata.set", params).await
    }

    /// List information about databases for a server. Exposed as list.
    /// If called with no server_id, all databases for all servers are listed.
    ///
    /// :param server_id: The Django id of the server containing the databases.
    /// :return: A list of database details.
    pub async fn databases_configured_list(&self, server_id: Option<i64>) -> ClientResult<Vec<ConfiguredDatabaseInfo>> {
        let params = Params::new()
            .opt("server_id", server_id)?;
        self.call_typed("databases.configured.list", params).await
    }

    /// Patch a configured database, given its id.
    ///
    /// :param database_id: The Django id of the database
    /// :param patch: An object containing the fields to update.
    /// :return: An object describing the database.
    pub async fn databases_configured_patch(&self, database_id: i64, patch: ConfiguredDatabasePatch) -> ClientResult<ConfiguredDatabaseInfo> {
        let params = Params::new()
            .arg("database_id", database_id)?
            .arg("patch", patch)?;
        self.call_typed("databases.configured.patch", params).await
    }

    /// Disconnect a configured database, after removing Mathesar SQL from it.
    /// If no role_name and password are submitted, we will determine the
    /// role which owns the msar schema on the database, then use that role
    /// for the SQL removal.
    /// All removals are performed safely, and without CASCADE. This is to
    /// make sure the user can’t accidentally lose data calling this
    /// function.
    ///
    /// :param database_id: The Django id of the database.
    /// :param schemas_to_remove: Mathesar schemas we should remove SQL from.
    /// :param strict: If True, we throw an exception and roll back changes if
    /// we fail to remove any objects which we expected to remove.
    /// :param role_name: the username of the role used for upgrading.
    /// :param password: the password of the role used for upgrading.
    /// :param disconnect_db_server: If True, will delete the stored server
    /// metadata(host, port, role credentials) from Mathesar.
    /// This is intended for optional use while disconnecting the
    /// last database on the server.
    pub async fn databases_configured_disconnect(&self, database_id: i64, schemas_to_remove: Option<Vec<String>>, strict: Option<bool>, role_name: Option<String>, password: Option<String>, disconnect_db_server: Option<bool>) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("database_id", database_id)?
            .opt("schemas_to_remove", schemas_to_remove)?
            .opt("strict", strict)?
            .opt("role_name", role_name)?
            .opt("password", password)?
            .opt("disconnect_db_server", disconnect_db_server)?;
        self.call("databases.configured.disconnect", params).await
    }

    /// List information about constraints in a table. Exposed as list.
    ///
    /// :param table_oid: The oid of the table to list constraints for.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: A list of constraint details.
    pub async fn constraints_list(&self, table_oid: i64, database_id: i64) -> ClientResult<Vec<serde_json::Value>> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("constraints.list", params).await
    }

    /// Add constraint(s) on a table in bulk.
    ///
    /// :param table_oid: Identity of the table to delete constraint for.
    /// :param constraint_def_list: A list describing the constraints to add.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: The oid(s) of all the constraints on the table.
    pub async fn constraints_add(&self, table_oid: i64, constraint_def_list: CreatableConstraintInfo, database_id: i64) -> ClientResult<Vec<i64>> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("constraint_def_list", constraint_def_list)?
            .arg("database_id", database_id)?;
        self.call_typed("constraints.add", params).await
    }

    /// Delete a constraint from a table.
    ///
    /// :param table_oid: Identity of the table to delete constraint for.
    /// :param constraint_oid: The OID of the constraint to delete.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: The name of the dropped constraint.
    pub async fn constraints_delete(&self, table_oid: i64, constraint_oid: i64, database_id: i64) -> ClientResult<String> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("constraint_oid", constraint_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("constraints.delete", params).await
    }

    /// Add a foreign key column to a table.
    /// The foreign key column will be newly created, and will reference the
    /// id column of the referent table.
    ///
    /// :param column_name: The name of the column to create.
    /// :param referrer_table_oid: The OID of the table getting the new column.
    /// :param referent_table_oid: The OID of the table being referenced.
    pub async fn data_modeling_add_foreign_key_column(&self, column_name: String, referrer_table_oid: i64, referent_table_oid: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("column_name", column_name)?
            .arg("referrer_table_oid", referrer_table_oid)?
            .arg("referent_table_oid", referent_table_oid)?;
        self.call("data_modeling.add_foreign_key_column", params).await
    }

    /// Add a mapping table to give a many-to-many link between referents.
    /// The foreign key columns in the mapping table will reference the id
    /// column of the referent tables.
    ///
    /// :param table_name: The name for the new mapping table.
    /// :param schema_oid: The OID of the schema for the mapping table.
    /// :param mapping_columns: The foreign key columns to create in the
    /// mapping table.
    pub async fn data_modeling_add_mapping_table(&self, table_name: String, schema_oid: i64, mapping_columns: Vec<MappingColumn>) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("table_name", table_name)?
            .arg("schema_oid", schema_oid)?
            .arg("mapping_columns", mapping_columns)?;
        self.call("data_modeling.add_mapping_table", params).await
    }

    /// Infer the best type for each column in the table.
    /// Currently we only suggest different types for columns which originate
    /// as type text.
    /// The response JSON will have attnum keys, and values will be the
    /// result of format_type for the inferred type of each column, i.e., the
    /// canonical string referring to the type.
    ///
    /// :param table_oid: The OID of the table whose columns we’re inferring types for.
    /// :param database_id: The Django id of the database containing the table.
    pub async fn data_modeling_suggest_types(&self, table_oid: i64, database_id: i64) -> ClientResult<serde_json::Map<String, serde_json::Value>> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("data_modeling.suggest_types", params).await
    }

    /// Extract columns from a table to create a new table, linked by a foreign key.
    ///
    /// :param table_oid: The OID of the table whose columns we’ll extract.
    /// :param column_attnums: A list of the attnums of the columns to extract.
    /// :param extracted_table_name: The name of the new table to be made from the extracted columns.
    /// :param database_id: The Django id of the database containing the table.
    /// :param relationship_fk_column_name: The name to give the new foreign key column in the remainder table (optional)
    /// :return: The SplitTableInfo object describing the details for the created table as a result of column extraction.
    pub async fn data_modeling_split_table(&self, table_oid: i64, column_attnums: Vec<serde_json::Value>, extracted_table_name: String, database_id: i64, relationship_fk_column_name: Option<String>) -> ClientResult<SplitTableInfo> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("column_attnums", column_attnums)?
            .arg("extracted_table_name", extracted_table_name)?
            .arg("database_id", database_id)?
            .opt("relationship_fk_column_name", relationship_fk_column_name)?;
        self.call_typed("data_modeling.split_table", params).await
    }

    /// Extract columns from a table to a referent table, linked by a foreign key.
    ///
    /// :param source_table_oid: The OID of the source table whose column(s) we’ll extract.
    /// :param target_table_oid: The OID of the target table where the extracted column(s) will be added.
    /// :param move_column_attnums: The list of attnum(s) to move from source table to the target table.
    /// :param database_id: The Django id of the database containing the table.
    pub async fn data_modeling_move_columns(&self, source_table_oid: i64, target_table_oid: i64, move_column_attnums: Vec<i64>, database_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("source_table_oid", source_table_oid)?
            .arg("target_table_oid", target_table_oid)?
            .arg("move_column_attnums", move_column_attnums)?
            .arg("database_id", database_id)?;
        self.call("data_modeling.move_columns", params).await
    }

    /// Get information about a database.
    ///
    /// :param database_id: The Django id of the database.
    /// :return: Information about the database, and the current user privileges.
    pub async fn databases_get(&self, database_id: i64) -> ClientResult<DatabaseInfo> {
        let params = Params::new()
            .arg("database_id", database_id)?;
        self.call_typed("databases.get", params).await
    }

    /// Drop a database from the server.
    ///
    /// :param database_oid: The OID of the database to delete on the database.
    /// :param database_id: The Django id of the database to connect to.
    pub async fn databases_delete(&self, database_oid: i64, database_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("database_oid", database_oid)?
            .arg("database_id", database_id)?;
        self.call("databases.delete", params).await
    }

    /// Install, Upgrade, or Reinstall the Mathesar SQL on a database.
    /// If no username and password are submitted, we will determine the
    /// role which owns the msar schema on the database, then use that role
    /// for the upgrade.
    ///
    /// :param database_id: The Django id of the database.
    /// :param username: The username of the role used for upgrading.
    /// :param password: The password of the role used for upgrading.
    pub async fn databases_upgrade_sql(&self, database_id: i64, username: Option<String>, password: Option<String>) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("database_id", database_id)?
            .opt("username", username)?
            .opt("password", password)?;
        self.call("databases.upgrade_sql", params).await
    }

    /// List database privileges for non-inherited roles.
    ///
    /// :param database_id: The Django id of the database.
    /// :return: A list of database privileges.
    pub async fn databases_privileges_list_direct(&self, database_id: i64) -> ClientResult<Vec<DBPrivileges>> {
        let params = Params::new()
            .arg("database_id", database_id)?;
        self.call_typed("databases.privileges.list_direct", params).await
    }

    /// Replace direct database privileges for roles.
    /// Possible privileges are CONNECT, CREATE, and TEMPORARY.
    /// Only roles which are included in a passed DBPrivileges object are
    /// affected.
    /// WARNING: Any privilege included in the direct list for a role
    /// is GRANTed, and any privilege not included is REVOKEd.
    ///
    /// :param privileges: The new privilege sets for roles.
    /// :param database_id: The Django id of the database.
    /// :return: A list of all non-default privileges on the database after theoperation.
    pub async fn databases_privileges_replace_for_roles(&self, privileges: serde_json::Value, database_id: serde_json::Value) -> ClientResult<Vec<DBPrivileges>> {
        let params = Params::new()
            .arg("privileges", privileges)?
            .arg("database_id", database_id)?;
        self.call_typed("databases.privileges.replace_for_roles", params).await
    }

    /// Transfers ownership of the current database to a new owner.
    ///
    /// :param new_owner_oid: The OID of the role whom we want to be the new owner of the current database.
    /// :param database_id: The Django id of the database whose ownership is to be transferred.
    /// :return: Information about the database, and the current user privileges.
    pub async fn databases_privileges_transfer_ownership(&self, new_owner_oid: serde_json::Value, database_id: serde_json::Value) -> ClientResult<DatabaseInfo> {
        let params = Params::new()
            .arg("new_owner_oid", new_owner_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("databases.privileges.transfer_ownership", params).await
    }

    /// Set up a new database on the internal server.
    /// The calling user will get access to that database using the default
    /// role stored in Django settings.
    ///
    /// :param database: The name of the new database.
    /// :param sample_data: A list of strings requesting that some example data
    /// sets be installed on the underlying database. Valid list
    /// members are:
    /// - ‘bike_shop’
    /// - ‘hardware_store’
    /// - ‘ice_cream_employees’
    /// - ‘library_management’
    /// - ‘library_makerspace’
    /// - ‘museum_exhibits’
    /// - ‘nonprofit_grants’
    /// :param nickname: An optional nickname for the database.
    pub async fn databases_setup_create_new(&self, database: String, sample_data: Option<Vec<String>>, nickname: Option<Option<String>>) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("database", database)?
            .opt("sample_data", sample_data)?
            .opt("nickname", nickname)?;
        self.call("databases.setup.create_new", params).await
    }

    /// Connect Mathesar to an existing database on a server.
    /// The calling user will get access to that database using the
    /// credentials passed to this function.
    ///
    /// :param host: The host of the database server.
    /// :param port: The port of the database server.
    /// :param database: The name of the database on the server.
    /// :param role: The role on the server to use for the connection.
    /// :param password: A password valid for the role.
    /// :param sample_data: A list of strings requesting that some example data
    /// sets be installed on the underlying database. Valid list
    /// members are:
    /// - ‘bike_shop’
    /// - ‘hardware_store’
    /// - ‘ice_cream_employees’
    /// - ‘library_management’
    /// - ‘library_makerspace’
    /// - ‘museum_exhibits’
    /// - ‘nonprofit_grants’
    /// :param nickname: An optional nickname for the database.
    pub async fn databases_setup_connect_existing(&self, host: String, database: String, role: String, password: String, port: Option<Option<i64>>, sample_data: Option<Vec<String>>, nickname: Option<Option<String>>) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("host", host)?
            .arg("database", database)?
            .arg("role", role)?
            .arg("password", password)?
            .opt("port", port)?
            .opt("sample_data", sample_data)?
            .opt("nickname", nickname)?;
        self.call("databases.setup.connect_existing", params).await
    }

    /// List information about explorations for a database. Exposed as list.
    ///
    /// :param database_id: The Django id of the database containing the explorations.
    /// :param schema_oid: The OID of the schema containing the base table(s) of the exploration(s).(optional)
    /// :return: A list of exploration details.
    pub async fn explorations_list(&self, database_id: i64, schema_oid: Option<i64>) -> ClientResult<Vec<ExplorationInfo>> {
        let params = Params::new()
            .arg("database_id", database_id)?
            .opt("schema_oid", schema_oid)?;
        self.call_typed("explorations.list", params).await
    }

    /// List information about an exploration.
    ///
    /// :param exploration_id: The Django id of the exploration.
    /// :return: Exploration details for a given exploration_id.
    pub async fn explorations_get(&self, exploration_id: i64) -> ClientResult<ExplorationInfo> {
        let params = Params::new()
            .arg("exploration_id", exploration_id)?;
        self.call_typed("explorations.get", params).await
    }

    /// Add a new exploration.
    ///
    /// :param exploration_def: A dict describing the exploration to create.
    /// :return: The exploration details for the newly created exploration.
    pub async fn explorations_add(&self, exploration_def: ExplorationDef) -> ClientResult<ExplorationInfo> {
        let params = Params::new()
            .arg("exploration_def", exploration_def)?;
        self.call_typed("explorations.add", params).await
    }

    /// Delete an exploration.
    ///
    /// :param exploration_id: The Django id of the exploration to delete.
    pub async fn explorations_delete(&self, exploration_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("exploration_id", exploration_id)?;
        self.call("explorations.delete", params).await
    }

    /// Replace a saved exploration.
    ///
    /// :param new_exploration: A dict describing the exploration to replace, including the updated fields.
    /// :return: The exploration details for the replaced exploration.
    pub async fn explorations_replace(&self, new_exploration: ExplorationInfo) -> ClientResult<ExplorationInfo> {
        let params = Params::new()
            .arg("new_exploration", new_exploration)?;
        self.call_typed("explorations.replace", params).await
    }

    /// Run an exploration.
    ///
    /// :param exploration_def: A dict describing an exploration to run.
    /// :param limit: The max number of rows to return.(default 100)
    /// :param offset: The number of rows to skip.(default 0)
    /// :return: The result of the exploration run.
    pub async fn explorations_run(&self, exploration_def: ExplorationDef, limit: Option<i64>, offset: Option<i64>) -> ClientResult<ExplorationResult> {
        let params = Params::new()
            .arg("exploration_def", exploration_def)?
            .opt("limit", limit)?
            .opt("offset", offset)?;
        self.call_typed("explorations.run", params).await
    }

    /// Run a saved exploration.
    ///
    /// :param exploration_id: The Django id of the exploration to run.
    /// :param limit: The max number of rows to return.(default 100)
    /// :param offset: The number of rows to skip.(default 0)
    /// :return: The result of the exploration run.
    pub async fn explorations_run_saved(&self, exploration_id: i64, limit: Option<i64>, offset: Option<i64>) -> ClientResult<ExplorationResult> {
        let params = Params::new()
            .arg("exploration_id", exploration_id)?
            .opt("limit", limit)?
            .opt("offset", offset)?;
        self.call_typed("explorations.run_saved", params).await
    }

    /// List records from a table, and its row count. Exposed as list.
    ///
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :param limit: The maximum number of rows we’ll return.
    /// :param offset: The number of rows to skip before returning records from
    /// following rows.
    /// :param order: An array of ordering definition objects.
    /// :param filter: An array of filter definition objects.
    /// :param grouping: An array of group definition objects.
    /// :param return_record_summaries: Whether to return summaries of retrieved
    /// records.
    /// :return: The requested records, along with some metadata.
    pub async fn records_list(&self, table_oid: i64, database_id: i64, limit: Option<i64>, offset: Option<i64>, order: Option<Vec<OrderBy>>, filter: Option<Filter>, grouping: Option<Grouping>, return_record_summaries: Option<bool>) -> ClientResult<RecordList> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?
            .opt("limit", limit)?
            .opt("offset", offset)?
            .opt("order", order)?
            .opt("filter", filter)?
            .opt("grouping", grouping)?
            .opt("return_record_summaries", return_record_summaries)?;
        self.call_typed("records.list", params).await
    }

    /// Get single record from a table by its primary key.
    ///
    /// :param record_id: The primary key value of the record to be gotten.
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :param return_record_summaries: Whether to return summaries of the
    /// retrieved record.
    /// :param table_record_summary_templates: A dict of record summary templates.
    /// If none are provided, then the templates will be take from the
    /// Django metadata. Any templates provided will take precedence on a
    /// per-table basis over the stored metadata templates. The purpose of
    /// this function parameter is to allow clients to generate record
    /// summary previews without persisting any metadata.
    /// :return: The requested record, along with some metadata.
    pub async fn records_get(&self, record_id: serde_json::Value, table_oid: i64, database_id: i64, return_record_summaries: Option<bool>, table_record_summary_templates: Option<std::collections::BTreeMap<String, serde_json::Value>>) -> ClientResult<RecordList> {
        let params = Params::new()
            .arg("record_id", record_id)?
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?
            .opt("return_record_summaries", return_record_summaries)?
            .opt("table_record_summary_templates", table_record_summary_templates)?;
        self.call_typed("records.get", params).await
    }

    /// Add a single record to a table.
    /// The form of the record_def is determined by the underlying table.
    /// Keys should be attnums, and values should be the desired value for
    /// that column in the created record. Missing keys will use default
    /// values (if set on the DB), and explicit null values will set null
    /// for that value regardless of default (with obvious exceptions where
    /// that would violate some constraint)
    ///
    /// :param record_def: An object representing the record to be added.
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :param return_record_summaries: Whether to return summaries of the added
    /// record.
    /// :return: The created record, along with some metadata.
    pub async fn records_add(&self, record_def: serde_json::Map<String, serde_json::Value>, table_oid: i64, database_id: i64, return_record_summaries: Option<bool>) -> ClientResult<RecordAdded> {
        let params = Params::new()
            .arg("record_def", record_def)?
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?
            .opt("return_record_summaries", return_record_summaries)?;
        self.call_typed("records.add", params).await
    }

    /// Modify a record in a table.
    /// The form of the record_def is determined by the underlying table.
    /// Keys should be attnums, and values should be the desired value for
    /// that column in the modified record. Explicit null values will set
    /// null for that value (with obvious exceptions where that would violate
    /// some constraint).
    ///
    /// :param record_def: An object representing the record to be added.
    /// :param record_id: The primary key value of the record to modify.
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :param return_record_summaries: Whether to return summaries of the
    /// modified record.
    /// :return: The modified record, along with some metadata.
    pub async fn records_patch(&self, record_def: serde_json::Map<String, serde_json::Value>, record_id: serde_json::Value, table_oid: i64, database_id: i64, return_record_summaries: Option<bool>) -> ClientResult<RecordAdded> {
        let params = Params::new()
            .arg("record_def", record_def)?
            .arg("record_id", record_id)?
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?
            .opt("return_record_summaries", return_record_summaries)?;
        self.call_typed("records.patch", params).await
    }

    /// Delete records from a table by primary key.
    ///
    /// :param record_ids: The primary key values of the records to be deleted.
    /// :param table_oid: The identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: The number of records deleted.
    pub async fn records_delete(&self, record_ids: Vec<serde_json::Value>, table_oid: i64, database_id: i64) -> ClientResult<Option<i64>> {
        let params = Params::new()
            .arg("record_ids", record_ids)?
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("records.delete", params).await
    }

    /// List records from a table according to search_params.
    /// Literals will be searched for in a basic way in string-like columns,
    /// but will have to match exactly in non-string-like columns.
    /// Records are assigned a score based on how many matches, and of what
    /// quality, they have with the passed search parameters.
    ///
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :param search_params: Results are ranked and filtered according to the
    /// objects passed here.
    /// :param limit: The maximum number of rows we’ll return.
    /// :return: The requested records, along with some metadata.
    pub async fn records_search(&self, table_oid: i64, database_id: i64, search_params: Option<Vec<SearchParam>>, limit: Option<i64>) -> ClientResult<RecordList> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?
            .opt("search_params", search_params)?
            .opt("limit", limit)?;
        self.call_typed("records.search", params).await
    }

    /// List information about roles for a database server. Exposed as list.
    /// Requires a database id inorder to connect to the server.
    ///
    /// :param database_id: The Django id of the database.
    /// :return: A list of roles present on the database server.
    pub async fn roles_list(&self, database_id: i64) -> ClientResult<Vec<RoleInfo>> {
        let params = Params::new()
            .arg("database_id", database_id)?;
        self.call_typed("roles.list", params).await
    }

    /// Add a new login/non-login role on a database server.
    ///
    /// :param rolename: The name of the role to be created.
    /// :param database_id: The Django id of the database.
    /// :param password: The password for the rolename to set.
    /// :param login: Whether the role to be created could login.
    /// :return: A dict describing the created role.
    pub async fn roles_add(&self, rolename: String, database_id: i64, password: Option<String>, login: Option<bool>) -> ClientResult<RoleInfo> {
        let params = Params::new()
            .arg("rolename", rolename)?
            .arg("database_id", database_id)?
            .opt("password", password)?
            .opt("login", login)?;
        self.call_typed("roles.add", params).await
    }

    /// Drop a role on a database server.
    ///
    /// :param role_oid: The OID of the role to drop on the database.
    /// :param database_id: The Django id of the database.
    pub async fn roles_delete(&self, role_oid: i64, database_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("role_oid", role_oid)?
            .arg("database_id", database_id)?;
        self.call("roles.delete", params).await
    }

    /// Get information about the current role and all the parent role(s) whose
    /// privileges are immediately available to current role without doing SET ROLE.
    ///
    /// :param database_id: The Django id of the database.
    /// :return: A dict describing the current role.
    pub async fn roles_get_current_role(&self, database_id: i64) -> ClientResult<serde_json::Map<String, serde_json::Value>> {
        let params = Params::new()
            .arg("database_id", database_id)?;
        self.call_typed("roles.get_current_role", params).await
    }

    /// Grant/Revoke direct membership to/from roles.
    ///
    /// :param parent_role_oid: The OID of role whose membership will be granted/revoked to/from other roles.
    /// :param members: An array of role OID(s) whom we want to grant direct membership of the parent role.
    /// Only the OID(s) present in the array will be granted membership of parent role,
    /// Membership will be revoked for existing members not present in this array.
    /// :return: A dict describing the updated information of the parent role.
    pub async fn roles_set_members(&self, parent_role_oid: i64, members: Vec<serde_json::Value>) -> ClientResult<RoleInfo> {
        let params = Params::new()
            .arg("parent_role_oid", parent_role_oid)?
            .arg("members", members)?;
        self.call_typed("roles.set_members", params).await
    }

    /// List information about roles configured in Mathesar. Exposed as list.
    ///
    /// :param server_id: The Django id of the Server containing the configured roles.
    /// :return: A list of configured roles.
    pub async fn roles_configured_list(&self, server_id: i64) -> ClientResult<Vec<ConfiguredRoleInfo>> {
        let params = Params::new()
            .arg("server_id", server_id)?;
        self.call_typed("roles.configured.list", params).await
    }

    /// Configure a role in Mathesar for a database server.
    ///
    /// :param server_id: The Django id of the Server to contain the configured role.
    /// :param name: The name of the role.
    /// :param password: The password for the role.
    /// :return: The newly configured role.
    pub async fn roles_configured_add(&self, server_id: i64, name: String, password: String) -> ClientResult<ConfiguredRoleInfo> {
        let params = Params::new()
            .arg("server_id", server_id)?
            .arg("name", name)?
            .arg("password", password)?;
        self.call_typed("roles.configured.add", params).await
    }

    /// Delete a configured role for a server.
    ///
    /// :param configured_role_id: The Django id of the ConfiguredRole model instance.
    pub async fn roles_configured_delete(&self, configured_role_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("configured_role_id", configured_role_id)?;
        self.call("roles.configured.delete", params).await
    }

    /// Set the password of a configured role for a server.
    ///
    /// :param configured_role_id: The Django id of the ConfiguredRole model instance.
    /// :param password: The password for the role.
    pub async fn roles_configured_set_password(&self, configured_role_id: i64, password: String) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("configured_role_id", configured_role_id)?
            .arg("password", password)?;
        self.call("roles.configured.set_password", params).await
    }

    /// List information about schemas in a database. Exposed as list.
    ///
    /// :param database_id: The Django id of the database containing the table.
    /// :return: A list of SchemaInfo objects
    pub async fn schemas_list(&self, database_id: i64) -> ClientResult<Vec<SchemaInfo>> {
        let params = Params::new()
            .arg("database_id", database_id)?;
        self.call_typed("schemas.list", params).await
    }

    /// Get information about a schema in a database.
    ///
    /// :param schema_oid: The OID of the schema to get.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: The SchemaInfo describing the user-defined schema in the database.
    pub async fn schemas_get(&self, schema_oid: i64, database_id: i64) -> ClientResult<SchemaInfo> {
        let params = Params::new()
            .arg("schema_oid", schema_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("schemas.get", params).await
    }

    /// Add a schema
    ///
    /// :param name: The name of the schema to add.
    /// :param database_id: The Django id of the database containing the schema.
    /// :param owner_oid: The OID of the role who will own the new schema.
    /// If owner_oid is None, the current role will be the owner of the new schema.
    /// :param description: A description of the schema
    /// :return: The SchemaInfo describing the user-defined schema in the database.
    pub async fn schemas_add(&self, name: String, database_id: i64, owner_oid: Option<i64>, description: Option<Option<String>>) -> ClientResult<SchemaInfo> {
        let params = Params::new()
            .arg("name", name)?
            .arg("database_id", database_id)?
            .opt("owner_oid", owner_oid)?
            .opt("description", description)?;
        self.call_typed("schemas.add", params).await
    }

    /// Safely drop all objects in each schema, then the schemas themselves.
    /// Does not work on the internal msar schema.
    /// If any passed schema doesn’t exist, an exception will be raised. If
    /// any object exists in a schema which isn’t passed, but which depends
    /// on an object in a passed schema, an exception will be raised.
    ///
    /// :param schema_oids: The OIDs of the schemas to delete.
    /// :param database_id: The Django id of the database containing the schema.
    pub async fn schemas_delete(&self, schema_oids: Vec<i64>, database_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("schema_oids", schema_oids)?
            .arg("database_id", database_id)?;
        self.call("schemas.delete", params).await
    }

    /// Patch a schema, given its OID.
    ///
    /// :param schema_oid: The OID of the schema to delete.
    /// :param database_id: The Django id of the database containing the schema.
    /// :param patch: A SchemaPatch object containing the fields to update.
    /// :return: The SchemaInfo describing the user-defined schema in the database.
    pub async fn schemas_patch(&self, schema_oid: i64, database_id: i64, patch: SchemaPatch) -> ClientResult<SchemaInfo> {
        let params = Params::new()
            .arg("schema_oid", schema_oid)?
            .arg("database_id", database_id)?
            .arg("patch", patch)?;
        self.call_typed("schemas.patch", params).await
    }

    /// List direct schema privileges for roles.
    ///
    /// :param schema_oid: The OID of the schema whose privileges we’ll list.
    /// :param database_id: The Django id of the database containing the schema.
    /// :return: A list of schema privileges.
    pub async fn schemas_privileges_list_direct(&self, schema_oid: i64, database_id: i64) -> ClientResult<Vec<SchemaPrivileges>> {
        let params = Params::new()
            .arg("schema_oid", schema_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("schemas.privileges.list_direct", params).await
    }

    /// Replace direct schema privileges for roles.
    /// Possible privileges are USAGE and CREATE.
    /// Only roles which are included in a passed SchemaPrivileges object
    /// are affected.
    /// WARNING: Any privilege included in the direct list for a role
    /// is GRANTed, and any privilege not included is REVOKEd.
    ///
    /// :param privileges: The new privilege sets for roles.
    /// :param schema_oid: The OID of the affected schema.
    /// :param database_id: The Django id of the database containing the schema.
    /// :return: A list of all non-default privileges on the schema after theoperation.
    pub async fn schemas_privileges_replace_for_roles(&self, privileges: Vec<SchemaPrivileges>, schema_oid: i64, database_id: i64) -> ClientResult<Vec<SchemaPrivileges>> {
        let params = Params::new()
            .arg("privileges", privileges)?
            .arg("schema_oid", schema_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("schemas.privileges.replace_for_roles", params).await
    }

    /// Transfers ownership of a given schema to a new owner.
    ///
    /// :param schema_oid: The OID of the schema to transfer.
    /// :param new_owner_oid: The OID of the role whom we want to be the new owner of the schema.
    /// :return: Information about the schema, and the current user privileges.
    pub async fn schemas_privileges_transfer_ownership(&self, schema_oid: serde_json::Value, new_owner_oid: serde_json::Value) -> ClientResult<SchemaInfo> {
        let params = Params::new()
            .arg("schema_oid", schema_oid)?
            .arg("new_owner_oid", new_owner_oid)?;
        self.call_typed("schemas.privileges.transfer_ownership", params).await
    }

    /// List information about tables for a schema. Exposed as list.
    ///
    /// :param schema_oid: Identity of the schema in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: A list of table details.
    pub async fn tables_list(&self, schema_oid: i64, database_id: i64) -> ClientResult<Vec<TableInfo>> {
        let params = Params::new()
            .arg("schema_oid", schema_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("tables.list", params).await
    }

    /// List information about a table for a schema.
    ///
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: Table details for a given table oid.
    pub async fn tables_get(&self, table_oid: i64, database_id: i64) -> ClientResult<TableInfo> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("tables.get", params).await
    }

    /// Add a table with a default id column.
    ///
    /// :param schema_oid: Identity of the schema in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :param table_name: Name of the table to be created.
    /// :param pkey_column_info: A dict describing the primary key column to be created for the new table.
    /// :param column_data_list: A list describing columns to be created for the new table, in order.
    /// :param constraint_data_list: A list describing constraints to be created for the new table.
    /// :param owner_oid: The OID of the role who will own the new table.
    /// If owner_oid is None, the current role will be the owner of the new table.
    /// :param comment: The comment for the new table.
    /// :return: The oid, name, and renamed_columns of the created table.
    pub async fn tables_add(&self, schema_oid: i64, database_id: i64, table_name: Option<String>, pkey_column_info: Option<CreatablePkColumnInfo>, column_data_list: Option<Vec<CreatableColumnInfo>>, constraint_data_list: Option<Vec<CreatableConstraintInfo>>, owner_oid: Option<i64>, comment: Option<String>) -> ClientResult<i64> {
        let params = Params::new()
            .arg("schema_oid", schema_oid)?
            .arg("database_id", database_id)?
            .opt("table_name", table_name)?
            .opt("pkey_column_info", pkey_column_info)?
            .opt("column_data_list", column_data_list)?
            .opt("constraint_data_list", constraint_data_list)?
            .opt("owner_oid", owner_oid)?
            .opt("comment", comment)?;
        self.call_typed("tables.add", params).await
    }

    /// Delete a table from a schema.
    ///
    /// :param table_oid: Identity of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :param cascade: Whether to drop the dependent objects.
    /// :return: The name of the dropped table.
    pub async fn tables_delete(&self, table_oid: i64, database_id: i64, cascade: Option<bool>) -> ClientResult<String> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?
            .opt("cascade", cascade)?;
        self.call_typed("tables.delete", params).await
    }

    /// Alter details of a preexisting table in a database.
    ///
    /// :param table_oid: Identity of the table whose name, description or columns we’ll modify.
    /// :param table_data_dict: A list describing desired table alterations.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: The name of the altered table.
    pub async fn tables_patch(&self, table_oid: String, table_data_dict: SettableTableInfo, database_id: i64) -> ClientResult<String> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("table_data_dict", table_data_dict)?
            .arg("database_id", database_id)?;
        self.call_typed("tables.patch", params).await
    }

    /// Import a CSV/TSV into a table.
    ///
    /// :param data_file_id: The Django id of the DataFile containing desired CSV/TSV.
    /// :param schema_oid: Identity of the schema in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :param table_name: Name of the table to be imported.
    /// :param comment: The comment for the new table.
    /// :return: The oid, name, and renamed_columns of the created table.
    pub async fn tables_import(&self, data_file_id: i64, schema_oid: i64, database_id: i64, table_name: Option<Option<String>>, comment: Option<Option<String>>) -> ClientResult<AddedTableInfo> {
        let params = Params::new()
            .arg("data_file_id", data_file_id)?
            .arg("schema_oid", schema_oid)?
            .arg("database_id", database_id)?
            .opt("table_name", table_name)?
            .opt("comment", comment)?;
        self.call_typed("tables.import", params).await
    }

    /// Preview an imported table.
    ///
    /// :param table_oid: Identity of the imported table in the user’s database.
    /// :param columns: List of settings describing the casts to be applied to the columns.
    /// :param database_id: The Django id of the database containing the table.
    /// :param limit: The upper limit for the number of records to return.
    /// :return: The records from the specified columns of the table.
    pub async fn tables_get_import_preview(&self, table_oid: i64, columns: Vec<PreviewableColumnInfo>, database_id: i64, limit: Option<i64>) -> ClientResult<Vec<serde_json::Map<String, serde_json::Value>>> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("columns", columns)?
            .arg("database_id", database_id)?
            .opt("limit", limit)?;
        self.call_typed("tables.get_import_preview", params).await
    }

    /// List details for joinable tables.
    ///
    /// :param table_oid: Identity of the table to get joinable tables for.
    /// :param database_id: The Django id of the database containing the table.
    /// :param max_depth: Specifies how far to search for joinable tables.
    /// :return: Joinable table details for a given table.
    pub async fn tables_list_joinable(&self, table_oid: i64, database_id: i64, max_depth: Option<i64>) -> ClientResult<JoinableTableInfo> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?
            .opt("max_depth", max_depth)?;
        self.call_typed("tables.list_joinable", params).await
    }

    /// List tables in a schema, along with the metadata associated with each table
    ///
    /// :param schema_oid: PostgreSQL OID of the schema containing the tables.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: A list of table details along with metadata.
    pub async fn tables_list_with_metadata(&self, schema_oid: i64, database_id: i64) -> ClientResult<Vec<serde_json::Value>> {
        let params = Params::new()
            .arg("schema_oid", schema_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("tables.list_with_metadata", params).await
    }

    /// Get information about a table in a schema, along with the associated table metadata.
    ///
    /// :param table_oid: The OID of the table in the user’s database.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: A dict describing table details along with its metadata.
    pub async fn tables_get_with_metadata(&self, table_oid: i64, database_id: i64) -> ClientResult<serde_json::Map<String, serde_json::Value>> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("tables.get_with_metadata", params).await
    }

    /// List metadata associated with tables for a database.
    ///
    /// :param database_id: The Django id of the database containing the table.
    /// :return: Metadata object for a given table oid.
    pub async fn tables_metadata_list(&self, database_id: i64) -> ClientResult<Vec<TableMetaDataRecord>> {
        let params = Params::new()
            .arg("database_id", database_id)?;
        self.call_typed("tables.metadata.list", params).await
    }

    /// Set metadata for a table.
    ///
    /// :param table_oid: The PostgreSQL OID of the table.
    /// :param metadata: A TableMetaDataBlob object describing desired table metadata to set.
    /// :param database_id: The Django id of the database containing the table.
    pub async fn tables_metadata_set(&self, table_oid: i64, metadata: TableMetaDataBlob, database_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("metadata", metadata)?
            .arg("database_id", database_id)?;
        self.call("tables.metadata.set", params).await
    }

    /// List direct table privileges for roles.
    ///
    /// :param table_oid: The OID of the table whose privileges we’ll list.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: A list of table privileges.
    pub async fn tables_privileges_list_direct(&self, table_oid: i64, database_id: i64) -> ClientResult<Vec<TablePrivileges>> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("tables.privileges.list_direct", params).await
    }

    /// Replace direct table privileges for roles.
    /// Possible privileges are INSERT, SELECT, UPDATE, DELETE, TRUNCATE, REFERENCES and TRIGGER.
    /// Only roles which are included in a passed TablePrivileges object
    /// are affected.
    /// WARNING: Any privilege included in the direct list for a role
    /// is GRANTed, and any privilege not included is REVOKEd.
    ///
    /// :param privileges: The new privilege sets for roles.
    /// :param table_oid: The OID of the affected table.
    /// :param database_id: The Django id of the database containing the table.
    /// :return: A list of all non-default privileges on the table after theoperation.
    pub async fn tables_privileges_replace_for_roles(&self, privileges: Vec<TablePrivileges>, table_oid: i64, database_id: i64) -> ClientResult<Vec<TablePrivileges>> {
        let params = Params::new()
            .arg("privileges", privileges)?
            .arg("table_oid", table_oid)?
            .arg("database_id", database_id)?;
        self.call_typed("tables.privileges.replace_for_roles", params).await
    }

    /// Transfers ownership of a given table to a new owner.
    ///
    /// :param table_oid: The OID of the table to transfer.
    /// :param new_owner_oid: The OID of the role whom we want to be the new owner of the table.
    /// :return: Information about the table, and the current user privileges.
    pub async fn tables_privileges_transfer_ownership(&self, table_oid: serde_json::Value, new_owner_oid: serde_json::Value) -> ClientResult<TableInfo> {
        let params = Params::new()
            .arg("table_oid", table_oid)?
            .arg("new_owner_oid", new_owner_oid)?;
        self.call_typed("tables.privileges.transfer_ownership", params).await
    }

    /// List information about all mathesar users. Exposed as list.
    ///
    /// :return: A list of information about mathesar users.
    pub async fn users_list(&self) -> ClientResult<Vec<UserInfo>> {
        let params = Params::new();
        self.call_typed("users.list", params).await
    }

    /// List information about a mathesar user.
    ///
    /// :param user_id: The Django id of the user.
    /// :return: User information for a given user_id.
    pub async fn users_get(&self, user_id: i64) -> ClientResult<UserInfo> {
        let params = Params::new()
            .arg("user_id", user_id)?;
        self.call_typed("users.get", params).await
    }

    /// Add a new mathesar user.
    ///
    /// :param user_def: A dict describing the user to create.
    /// :return: The information of the created user.
    pub async fn users_add(&self, user_def: UserDef) -> ClientResult<UserInfo> {
        let params = Params::new()
            .arg("user_def", user_def)?;
        self.call_typed("users.add", params).await
    }

    /// Delete a mathesar user.
    ///
    /// :param user_id: The Django id of the user to delete.
    pub async fn users_delete(&self, user_id: i64) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("user_id", user_id)?;
        self.call("users.delete", params).await
    }

    /// Alter details of currently logged in mathesar user.
    ///
    /// :param username: The username of the user.
    /// :param email: The email of the user.
    /// :param full_name: The full name of the user.
    /// :param display_language: Specifies the display language for the user, can be set to either en or ja.
    /// :return: Updated user information of the caller.
    pub async fn users_patch_self(&self, username: String, email: String, full_name: String, display_language: String) -> ClientResult<UserInfo> {
        let params = Params::new()
            .arg("username", username)?
            .arg("email", email)?
            .arg("full_name", full_name)?
            .arg("display_language", display_language)?;
        self.call_typed("users.patch_self", params).await
    }

    /// Alter details of a mathesar user, given its user_id.
    ///
    /// :param user_id: The Django id of the user.
    /// :param username: The username of the user.
    /// :param email: The email of the user.
    /// :param is_superuser: Specifies whether to set the user as a superuser.
    /// :param full_name: The full name of the user.
    /// :param display_language: Specifies the display language for the user, can be set to either en or ja.
    /// :return: Updated user information for a given user_id.
    pub async fn users_patch_other(&self, user_id: i64, username: String, email: String, is_superuser: bool, full_name: String, display_language: String) -> ClientResult<UserInfo> {
        let params = Params::new()
            .arg("user_id", user_id)?
            .arg("username", username)?
            .arg("email", email)?
            .arg("is_superuser", is_superuser)?
            .arg("full_name", full_name)?
            .arg("display_language", display_language)?;
        self.call_typed("users.patch_other", params).await
    }

    /// Alter password of currently logged in mathesar user.
    ///
    /// :param old_password: Old password of the currently logged in user.
    /// :param new_password: New password of the user to set.
    pub async fn users_replace_own(&self, old_password: String, new_password: String) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("old_password", old_password)?
            .arg("new_password", new_password)?;
        self.call("users.replace_own", params).await
    }

    /// Alter password of a mathesar user, given its user_id.
    ///
    /// :param user_id: The Django id of the user.
    /// :param new_password: New password of the user to set.
    pub async fn users_revoke(&self, user_id: i64, new_password: String) -> ClientResult<serde_json::Value> {
        let params = Params::new()
            .arg("user_id", user_id)?
            .arg("new_password", new_password)?;
        self.call("users.revoke", params).await
    }
}

/// Parameter names of every method, in call order.
pub const SIGNATURES: &[(&str, &[&str])] = &[
    ("analytics.get_state", &[]),
    ("analytics.initialize", &[]),
    ("analytics.disable", &[]),
    ("analytics.view_report", &[]),
    ("analytics.upload_feedback", &["message"]),
    ("collaborators.list", &["database_id"]),
    ("collaborators.add", &["database_id", "user_id", "configured_role_id"]),
    ("collaborators.delete", &["collaborator_id"]),
    ("collaborators.set_role", &["collaborator_id", "configured_role_id"]),
    ("columns.list", &["table_oid", "database_id"]),
    ("columns.add", &["column_data_list", "table_oid", "database_id"]),
    ("columns.add_primary_key_column", &["pkey_type", "table_oid", "database_id", "drop_existing_pkey_column", "name"]),
    ("columns.patch", &["column_data_list", "table_oid", "database_id"]),
    ("columns.delete", &["column_attnums", "table_oid", "database_id"]),
    ("columns.list_with_metadata", &["table_oid", "database_id"]),
    ("columns.metadata.list", &["table_oid", "database_id"]),
    ("columns.metadata.set", &["column_meta_data_list", "table_oid", "database_id"]),
    ("databases.configured.list", &["server_id"]),
    ("databases.configured.patch", &["database_id", "patch"]),
    ("databases.configured.disconnect", &["database_id", "schemas_to_remove", "strict", "role_name", "password", "disconnect_db_server"]),
    ("constraints.list", &["table_oid", "database_id"]),
    ("constraints.add", &["table_oid", "constraint_def_list", "database_id"]),
    ("constraints.delete", &["table_oid", "constraint_oid", "database_id"]),
    ("data_modeling.add_foreign_key_column", &["column_name", "referrer_table_oid", "referent_table_oid"]),
    ("data_modeling.add_mapping_table", &["table_name", "schema_oid", "mapping_columns"]),
    ("data_modeling.suggest_types", &["table_oid", "database_id"]),
    ("data_modeling.split_table", &["table_oid", "column_attnums", "extracted_table_name", "database_id", "relationship_fk_column_name"]),
    ("data_modeling.move_columns", &["source_table_oid", "target_table_oid", "move_column_attnums", "database_id"]),
    ("databases.get", &["database_id"]),
    ("databases.delete", &["database_oid", "database_id"]),
    ("databases.upgrade_sql", &["database_id", "username", "password"]),
    ("databases.privileges.list_direct", &["database_id"]),
    ("databases.privileges.replace_for_roles", &["privileges", "database_id"]),
    ("databases.privileges.transfer_ownership", &["new_owner_oid", "database_id"]),
    ("databases.setup.create_new", &["database", "sample_data", "nickname"]),
    ("databases.setup.connect_existing", &["host", "database", "role", "password", "port", "sample_data", "nickname"]),
    ("explorations.list", &["database_id", "schema_oid"]),
    ("explorations.get", &["exploration_id"]),
    ("explorations.add", &["exploration_def"]),
    ("explorations.delete", &["exploration_id"]),
    ("explorations.replace", &["new_exploration"]),
    ("explorations.run", &["exploration_def", "limit", "offset"]),
    ("explorations.run_saved", &["exploration_id", "limit", "offset"]),
    ("records.list", &["table_oid", "database_id", "limit", "offset", "order", "filter", "grouping", "return_record_summaries"]),
    ("records.get", &["record_id", "table_oid", "database_id", "return_record_summaries", "table_record_summary_templates"]),
    ("records.add", &["record_def", "table_oid", "database_id", "return_record_summaries"]),
    ("records.patch", &["record_def", "record_id", "table_oid", "database_id", "return_record_summaries"]),
    ("records.delete", &["record_ids", "table_oid", "database_id"]),
    ("records.search", &["table_oid", "database_id", "search_params", "limit"]),
    ("roles.list", &["database_id"]),
    ("roles.add", &["rolename", "database_id", "password", "login"]),
    ("roles.delete", &["role_oid", "database_id"]),
    ("roles.get_current_role", &["database_id"]),
    ("roles.set_members", &["parent_role_oid", "members"]),
    ("roles.configured.list", &["server_id"]),
    ("roles.configured.add", &["server_id", "name", "password"]),
    ("roles.configured.delete", &["configured_role_id"]),
    ("roles.configured.set_password", &["configured_role_id", "password"]),
    ("schemas.list", &["database_id"]),
    ("schemas.get", &["schema_oid", "database_id"]),
    ("schemas.add", &["name", "database_id", "owner_oid", "description"]),
    ("schemas.delete", &["schema_oids", "database_id"]),
    ("schemas.patch", &["schema_oid", "database_id", "patch"]),
    ("schemas.privileges.list_direct", &["schema_oid", "database_id"]),
    ("schemas.privileges.replace_for_roles", &["privileges", "schema_oid", "database_id"]),
    ("schemas.privileges.transfer_ownership", &["schema_oid", "new_owner_oid"]),
    ("tables.list", &["schema_oid", "database_id"]),
    ("tables.get", &["table_oid", "database_id"]),
    ("tables.add", &["schema_oid", "database_id", "table_name", "pkey_column_info", "column_data_list", "constraint_data_list", "owner_oid", "comment"]),
    ("tables.delete", &["table_oid", "database_id", "cascade"]),
    ("tables.patch", &["table_oid", "table_data_dict", "database_id"]),
    ("tables.import", &["data_file_id", "schema_oid", "database_id", "table_name", "comment"]),
    ("tables.get_import_preview", &["table_oid", "columns", "database_id", "limit"]),
    ("tables.list_joinable", &["table_oid", "database_id", "max_depth"]),
    ("tables.list_with_metadata", &["schema_oid", "database_id"]),
    ("tables.get_with_metadata", &["table_oid", "database_id"]),
    ("tables.metadata.list", &["database_id"]),
    ("tables.metadata.set", &["table_oid", "metadata", "database_id"]),
    ("tables.privileges.list_direct", &["table_oid", "database_id"]),
    ("tables.privileges.replace_for_roles", &["privileges", "table_oid", "database_id"]),
    ("tables.privileges.transfer_ownership", &["table_oid", "new_owner_oid"]),
    ("users.list", &[]),
    ("users.get", &["user_id"]),
    ("users.add", &["user_def"]),
    ("users.delete", &["user_id"]),
    ("users.patch_self", &["username", "email", "full_name", "display_language"]),
    ("users.patch_other", &["user_id", "username", "email", "is_superuser", "full_name", "display_language"]),
    ("users.replace_own", &["old_password", "new_password"]),
    ("users.revoke", &["user_id", "new_password"]),
];
