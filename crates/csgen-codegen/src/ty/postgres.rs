/// Default C# type for a PostgreSQL type name, with the `pg_catalog`
/// namespace already stripped.
pub(super) fn cs_type(db_type: &str) -> Option<&'static str> {
    Some(match db_type {
        "serial" | "serial4" | "integer" | "int" | "int4" => "int",

        "bigserial" | "serial8" | "bigint" | "int8" => "long",

        "smallserial" | "serial2" | "smallint" | "int2" => "short",

        "real" | "float4" => "float",

        "float" | "double precision" | "float8" => "double",

        "numeric" | "money" => "decimal",

        "json" | "jsonb" | "xml" | "text" | "varchar" | "bpchar" | "string" | "citext"
        | "character varying" | "character" => "string",

        "boolean" | "bool" => "bool",

        "bytea" | "blob" => "byte[]",

        "date" | "timestamp" | "timestamptz" => "DateTime",

        "time" => "TimeSpan",

        "timetz" => "DateTimeOffset",

        "interval" => "NpgsqlTypes.NpgsqlInterval",

        "uuid" => "Guid",

        "inet" => "System.Net.IPAddress",

        "cidr" => "(System.Net.IPAddress, int)",

        "macaddr" | "macaddr8" => "System.Net.NetworkInformation.PhysicalAddress",

        "tsquery" => "NpgsqlTypes.NpgsqlTsQuery",

        "tsvector" => "NpgsqlTypes.NpgsqlTsVector",

        // Hierarchical labels: https://www.postgresql.org/docs/current/ltree.html
        "ltree" | "lquery" | "ltxtquery" => "string",

        "daterange" | "tsrange" | "tstzrange" => "NpgsqlTypes.NpgsqlRange<DateTime>",

        "datemultirange" | "tsmultirange" | "tstzmultirange" => {
            "NpgsqlTypes.NpgsqlRange<DateTime>[]"
        }

        "numrange" => "NpgsqlTypes.NpgsqlRange<decimal>",

        "nummultirange" => "NpgsqlTypes.NpgsqlRange<decimal>[]",

        "int4range" => "NpgsqlTypes.NpgsqlRange<int>",

        "int4multirange" => "NpgsqlTypes.NpgsqlRange<int>[]",

        "int8range" => "NpgsqlTypes.NpgsqlRange<long>",

        "int8multirange" => "NpgsqlTypes.NpgsqlRange<long>[]",

        "hstore" => "System.Collections.Generic.Dictionary<string, string>",

        "bit" | "varbit" => "System.Collections.BitArray",

        "box" => "NpgsqlTypes.NpgsqlBox",
        "circle" => "NpgsqlTypes.NpgsqlCircle",
        "line" => "NpgsqlTypes.NpgsqlLine",
        "lseg" => "NpgsqlTypes.NpgsqlLSeg",
        "path" => "NpgsqlTypes.NpgsqlPath",
        "point" => "NpgsqlTypes.NpgsqlPoint",
        "polygon" => "NpgsqlTypes.NpgsqlPolygon",

        "cid" | "oid" | "xid" => "uint",

        "void" | "any" => super::OPAQUE_TYPE,

        _ => return None,
    })
}
