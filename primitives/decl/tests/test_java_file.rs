//! Rendering whole compilation units

use decl::*;

fn handler() -> ClassName { ClassName::new("software.amazon.awssdk.client", "SdkClientHandler") }

fn sample_class() -> TypeDecl {
    let params = ClassName::new("software.amazon.awssdk.client", "AwsSyncClientParams");
    let field = FieldDecl::builder(handler(), "clientHandler")
        .add_modifiers([Modifier::Final, Modifier::Private])
        .build();
    let constructor = MethodDecl::constructor()
        .add_modifiers([Modifier::Protected])
        .add_parameter(ParameterDecl::new(params.clone(), "clientParams"))
        .add_statement("this.$N = new $T($N)", args![&field, handler(), "clientParams"])
        .build()
        .expect("constructor");
    let close = MethodDecl::builder("close")
        .add_annotation(Annotation::override_())
        .add_modifiers([Modifier::Public])
        .add_exception(ClassName::java_lang("Exception"))
        .add_statement("$N.close()", args![&field])
        .build()
        .expect("close");

    TypeDecl::class_builder("DefaultJsonClient")
        .add_superinterface(ClassName::new("software.amazon.awssdk.services.json", "JsonClient"))
        .add_field(field)
        .add_method(constructor)
        .add_method(close)
        .build()
}

#[test]
fn test_render_class() {
    let file = JavaFile::new("software.amazon.awssdk.services.json", sample_class());
    let rendered = file.render().expect("render");
    let expected = "\
package software.amazon.awssdk.services.json;

import javax.annotation.Generated;
import software.amazon.awssdk.client.AwsSyncClientParams;
import software.amazon.awssdk.client.SdkClientHandler;

@Generated(\"software.amazon.awssdk:codegen\")
class DefaultJsonClient implements JsonClient {
    private final SdkClientHandler clientHandler;

    protected DefaultJsonClient(AwsSyncClientParams clientParams) {
        this.clientHandler = new SdkClientHandler(clientParams);
    }

    @Override
    public void close() throws Exception {
        clientHandler.close();
    }
}
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_is_deterministic() {
    let file = JavaFile::new("software.amazon.awssdk.services.json", sample_class());
    assert_eq!(file.render().expect("first"), file.render().expect("second"));
}

#[test]
fn test_relative_path() {
    let file = JavaFile::new("software.amazon.awssdk.services.json", sample_class());
    assert_eq!(file.relative_path(), "software/amazon/awssdk/services/json/DefaultJsonClient.java");
}

#[test]
fn test_simple_name_collision_falls_back_to_qualified() {
    let other = ClassName::new("software.amazon.awssdk.opensdk.protect.client", "SdkClientHandler");
    let method = MethodDecl::builder("handlers")
        .add_statement("$T a = null", args![handler()])
        .add_statement("$T b = null", args![other])
        .build()
        .expect("method");
    let decl = TypeDecl::class_builder("Both").add_method(method).build();
    let rendered = JavaFile::new("x.y", decl).generated_value(None).render().expect("render");

    assert!(!rendered.contains("import software.amazon.awssdk.client.SdkClientHandler;"));
    assert!(rendered.contains("software.amazon.awssdk.client.SdkClientHandler a = null;"));
    assert!(rendered.contains("software.amazon.awssdk.opensdk.protect.client.SdkClientHandler b = null;"));
    assert!(!rendered.contains("@Generated"));
}

#[test]
fn test_interface_methods() {
    let response = ClassName::new("p.model", "GetItemResponse");
    let request = ClassName::new("p.model", "GetItemRequest");
    let get_item = MethodDecl::builder("getItem")
        .add_modifiers([Modifier::Default])
        .returns(response)
        .add_parameter(ParameterDecl::new(request, "getItemRequest"))
        .add_statement("throw new $T()", args![ClassName::java_lang("UnsupportedOperationException")])
        .build()
        .expect("getItem");
    let waiters = MethodDecl::builder("waiters")
        .returns(ClassName::new("p.waiters", "PClientWaiters"))
        .build()
        .expect("waiters");
    let decl = TypeDecl::interface_builder("PClient")
        .add_modifiers([Modifier::Public])
        .add_superinterface(ClassName::java_lang("AutoCloseable"))
        .add_method(get_item)
        .add_method(waiters)
        .build();

    let rendered = JavaFile::new("p", decl).render().expect("render");
    assert!(rendered.contains("public interface PClient extends AutoCloseable {"));
    assert!(rendered.contains(
        "    default GetItemResponse getItem(GetItemRequest getItemRequest) {\n        throw new UnsupportedOperationException();\n    }\n"
    ));
    assert!(rendered.contains("    PClientWaiters waiters();\n"));
    assert!(rendered.contains("import p.waiters.PClientWaiters;"));
}

#[test]
fn test_varargs_and_type_variables() {
    let metadata = ClassName::new("software.amazon.awssdk.protocol.json", "JsonErrorShapeMetadata");
    let varargs = MethodDecl::builder("createErrorResponseHandler")
        .add_modifiers([Modifier::Private])
        .add_parameter(ParameterDecl::new(TypeName::from(metadata).array_of(), "errorShapeMetadata"))
        .varargs(true)
        .build()
        .expect("varargs");

    let request = ClassName::new("software.amazon.awssdk", "AmazonWebServiceRequest");
    let result = ClassName::new("software.amazon.awssdk", "DryRunResult");
    let x = TypeName::type_variable("X");
    let generic = MethodDecl::builder("dryRun")
        .add_modifiers([Modifier::Public])
        .add_type_variable(TypeName::bounded_type_variable("X", request))
        .returns(TypeName::parameterized(result, vec![x]))
        .add_statement("return null", args![])
        .build()
        .expect("generic");

    let decl = TypeDecl::class_builder("C").add_method(varargs).add_method(generic).build();
    let rendered = JavaFile::new("p", decl).render().expect("render");
    assert!(rendered.contains("private void createErrorResponseHandler(JsonErrorShapeMetadata... errorShapeMetadata) {"));
    assert!(rendered.contains("public <X extends AmazonWebServiceRequest> DryRunResult<X> dryRun() {"));
}

#[test]
fn test_javadoc_and_file_comment() {
    let decl = TypeDecl::class_builder("Documented")
        .javadoc("First line.\n\nSecond paragraph.")
        .build();
    let rendered = JavaFile::new("p", decl)
        .file_comment("Licensed under CC0.")
        .generated_value(None)
        .render()
        .expect("render");
    assert!(rendered.starts_with("/*\n * Licensed under CC0.\n */\n\npackage p;\n\n"));
    assert!(rendered.contains("/**\n * First line.\n *\n * Second paragraph.\n */\nclass Documented {\n}\n"));
}

#[test]
fn test_bad_format_surfaces_at_build() {
    let err = MethodDecl::builder("broken")
        .add_statement("$T x", args!["not a type"])
        .add_statement("fine()", args![])
        .build()
        .unwrap_err();
    assert!(matches!(err, DeclError::ArgumentKind { placeholder: 'T', .. }));
}
