use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ResolvedType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Checks that an object or interface type correctly implements every
/// interface it declares.
///
/// https://spec.graphql.org/October2021/#IsValidImplementation()
pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<SchemaBuildError>,
    implemented_iface_names: HashSet<&'a str>,
    type_: &'a ObjectOrInterfaceTypeData<ResolvedType>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData<ResolvedType>,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            implemented_iface_names: type_.interface_names().into_iter().collect(),
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<SchemaBuildError> {
        let type_name = self.type_.name();
        let type_fields = self.type_.fields();
        for iface_ref in self.type_.interfaces() {
            let iface_name = iface_ref.name();

            // Resolution already guarantees this is a defined interface.
            let iface = self.types_map
                .get(iface_name)
                .and_then(|iface_type| iface_type.as_interface());
            let iface = if let Some(iface) = iface { iface } else {
                continue;
            };

            // The implementing type must also explicitly implement each of
            // the interfaces *this* interface implements.
            for transitive_name in iface.interface_names() {
                if transitive_name != type_name
                    && !self.implemented_iface_names.contains(transitive_name) {
                    self.errors.push(SchemaBuildError::MissingTransitiveInterface {
                        type_name: type_name.to_string(),
                        interface_name: iface_name.to_string(),
                        missing_interface_name: transitive_name.to_string(),
                        location: iface_ref.ref_location().to_owned(),
                    });
                }
            }

            for (field_name, iface_field) in iface.fields() {
                let type_field = type_fields.get(field_name);
                let type_field = if let Some(type_field) = type_field { type_field } else {
                    self.errors.push(SchemaBuildError::InterfaceFieldNotImplemented {
                        type_name: type_name.to_string(),
                        interface_name: iface_name.to_string(),
                        field_name: field_name.to_string(),
                        location: self.type_.location().to_owned(),
                    });
                    continue;
                };

                // Every argument the interface declares must be accepted with
                // exactly the same type.
                for (arg_name, iface_arg) in iface_field.arguments() {
                    let type_arg = type_field.argument(arg_name);
                    let type_arg = if let Some(type_arg) = type_arg { type_arg } else {
                        self.errors.push(SchemaBuildError::InterfaceArgumentMissing {
                            type_name: type_name.to_string(),
                            interface_name: iface_name.to_string(),
                            field_name: field_name.to_string(),
                            argument_name: arg_name.to_string(),
                            location: type_field.location().to_owned(),
                        });
                        continue;
                    };

                    if type_arg.arg_type() != iface_arg.arg_type() {
                        self.errors.push(SchemaBuildError::InterfaceArgumentTypeMismatch {
                            type_name: type_name.to_string(),
                            interface_name: iface_name.to_string(),
                            field_name: field_name.to_string(),
                            argument_name: arg_name.to_string(),
                            expected_type: iface_arg.arg_type().to_string(),
                            actual_type: type_arg.arg_type().to_string(),
                            location: type_arg.location().to_owned(),
                        });
                    }
                }

                // Arguments the interface doesn't know about must be optional.
                //
                // See 2.d at https://spec.graphql.org/October2021/#IsValidImplementation()
                for (arg_name, type_arg) in type_field.arguments() {
                    if iface_field.argument(arg_name).is_none() && type_arg.is_required() {
                        self.errors.push(SchemaBuildError::RequiredExtraArgument {
                            type_name: type_name.to_string(),
                            interface_name: iface_name.to_string(),
                            field_name: field_name.to_string(),
                            argument_name: arg_name.to_string(),
                            location: type_arg.location().to_owned(),
                        });
                    }
                }

                let type_field_type = type_field.field_type();
                let iface_field_type = iface_field.field_type();
                if !type_field_type.is_subtype_of_impl(self.types_map, iface_field_type) {
                    self.errors.push(SchemaBuildError::InterfaceFieldTypeMismatch {
                        type_name: type_name.to_string(),
                        interface_name: iface_name.to_string(),
                        field_name: field_name.to_string(),
                        expected_type: iface_field_type.to_string(),
                        actual_type: type_field_type.to_string(),
                        location: type_field.location().to_owned(),
                    });
                }
            }
        }

        self.errors
    }
}
