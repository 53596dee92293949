//! Declarative definition of resource kinds.

/// Declares a resource kind: the model struct, its patch type and the
/// [`Resource`](crate::schema::Resource) implementation with one descriptor
/// per listed field, in the listed order.
///
/// ```ignore
/// resource! {
///     /// A learnable skill category.
///     pub struct Skill / SkillPatch in "skills" as "skill", "Skill" {
///         name: String => "name",
///         skill_icon: Option<String> => "skill_icon",
///     }
/// }
/// ```
macro_rules! resource {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $patch:ident in $table:literal as $kind:literal, $label:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty => $column:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            /// Identity assigned by the store on insert
            #[serde(default)]
            pub id: i64,
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
            /// Timestamp when the row was created (UTC)
            #[serde(default)]
            pub created_at: jiff::Timestamp,
            /// Timestamp when the row was last updated (UTC)
            #[serde(default)]
            pub updated_at: jiff::Timestamp,
        }

        #[doc = concat!("Partial update of a [`", stringify!($name), "`]. Absent fields are left unchanged.")]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $patch {
            $(
                $(#[$field_meta])*
                #[serde(
                    default,
                    deserialize_with = "crate::schema::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $field: Option<$ty>,
            )*
        }

        impl $crate::schema::Resource for $name {
            type Patch = $patch;

            const KIND: &'static str = $kind;
            const LABEL: &'static str = $label;
            const TABLE: &'static str = $table;

            fn fields() -> &'static [$crate::schema::Field<Self>] {
                const FIELDS: &[$crate::schema::Field<$name>] = &[
                    $(
                        $crate::schema::Field {
                            column: $column,
                            kind: <$ty as $crate::schema::Column>::KIND,
                            bind: |resource: &$name| {
                                <$ty as $crate::schema::Column>::to_value(&resource.$field)
                            },
                            scan: |resource: &mut $name, row: &rusqlite::Row<'_>, idx: usize| {
                                resource.$field = <$ty as $crate::schema::Column>::read(row, idx)?;
                                Ok(())
                            },
                            patch: |patch: &$patch| {
                                patch
                                    .$field
                                    .as_ref()
                                    .map(<$ty as $crate::schema::Column>::to_value)
                            },
                        },
                    )*
                ];
                FIELDS
            }

            fn id(&self) -> i64 {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }

            fn created_at(&self) -> jiff::Timestamp {
                self.created_at
            }

            fn set_created_at(&mut self, at: jiff::Timestamp) {
                self.created_at = at;
            }

            fn updated_at(&self) -> jiff::Timestamp {
                self.updated_at
            }

            fn set_updated_at(&mut self, at: jiff::Timestamp) {
                self.updated_at = at;
            }
        }
    };
}

pub(crate) use resource;
