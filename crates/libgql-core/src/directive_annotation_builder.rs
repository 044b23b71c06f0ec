use crate::Argument;
use crate::AstConversionError;
use crate::DirectiveAnnotation;
use crate::loc::SourceLocation;
use indexmap::IndexMap;
use libgql_parser::ast;

#[derive(Debug)]
pub struct DirectiveAnnotationBuilder;
impl DirectiveAnnotationBuilder {
    pub fn from_ast(
        directives: &[ast::DirectiveAnnotation<'_>],
    ) -> Result<Vec<DirectiveAnnotation>, AstConversionError> {
        directives.iter().map(|ast_annot| {
            let mut arguments = IndexMap::new();
            for ast_arg in &ast_annot.arguments {
                let arg = Argument::from_ast(ast_arg)?;
                if arguments.contains_key(arg.name()) {
                    return Err(AstConversionError::DuplicateDirectiveArgument {
                        argument_name: arg.name,
                        directive_name: ast_annot.name.as_str().to_string(),
                        location: arg.location,
                    });
                }
                arguments.insert(arg.name.clone(), arg);
            }
            Ok(DirectiveAnnotation {
                arguments,
                location: SourceLocation::from_span(&ast_annot.span),
                name: ast_annot.name.as_str().to_string(),
                name_location: SourceLocation::from_span(&ast_annot.name.span),
            })
        }).collect()
    }
}
