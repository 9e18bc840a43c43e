//! Classes of the client runtime referenced by generated code.
//!
//! Each function returns a fresh [`ClassName`]; generators never spell runtime
//! package names themselves.

use decl::ClassName;

macro_rules! runtime_classes {
    ($($name:ident => $package:literal . $simple:literal;)+) => {
        $(
            #[doc = concat!("`", $package, ".", $simple, "`.")]
            pub fn $name() -> ClassName { ClassName::new($package, $simple) }
        )+
    };
}

runtime_classes! {
    amazon_client_exception => "software.amazon.awssdk"."AmazonClientException";
    amazon_service_exception => "software.amazon.awssdk"."AmazonServiceException";
    amazon_web_service_request => "software.amazon.awssdk"."AmazonWebServiceRequest";
    amazon_web_service_response => "software.amazon.awssdk"."AmazonWebServiceResponse";
    request => "software.amazon.awssdk"."Request";
    sdk_base_exception => "software.amazon.awssdk"."SdkBaseException";

    sdk_internal_api => "software.amazon.awssdk.annotation"."SdkInternalApi";

    aws4_signer => "software.amazon.awssdk.auth"."Aws4Signer";
    query_string_signer => "software.amazon.awssdk.auth"."QueryStringSigner";
    static_signer_provider => "software.amazon.awssdk.auth"."StaticSignerProvider";
    presigner_params => "software.amazon.awssdk.auth.presign"."PresignerParams";

    aws_async_client_params => "software.amazon.awssdk.client"."AwsAsyncClientParams";
    aws_sync_client_params => "software.amazon.awssdk.client"."AwsSyncClientParams";
    client_execution_params => "software.amazon.awssdk.client"."ClientExecutionParams";
    client_handler => "software.amazon.awssdk.client"."ClientHandler";
    client_handler_params => "software.amazon.awssdk.client"."ClientHandlerParams";
    sdk_client_handler => "software.amazon.awssdk.client"."SdkClientHandler";

    client_builder => "software.amazon.awssdk.client.builder"."ClientBuilder";
    default_client_builder => "software.amazon.awssdk.client.builder"."DefaultClientBuilder";

    client_listener_configuration => "software.amazon.awssdk.config"."ClientListenerConfiguration";
    client_security_configuration => "software.amazon.awssdk.config"."ClientSecurityConfiguration";
    immutable_async_client_configuration => "software.amazon.awssdk.config"."ImmutableAsyncClientConfiguration";
    immutable_client_configuration => "software.amazon.awssdk.config"."ImmutableClientConfiguration";
    immutable_sync_client_configuration => "software.amazon.awssdk.config"."ImmutableSyncClientConfiguration";
    client_configuration_defaults => "software.amazon.awssdk.config.defaults"."ClientConfigurationDefaults";

    handler_chain_factory => "software.amazon.awssdk.handlers"."HandlerChainFactory";

    default_error_response_handler => "software.amazon.awssdk.http"."DefaultErrorResponseHandler";
    http_response_handler => "software.amazon.awssdk.http"."HttpResponseHandler";
    sdk_http_configuration_options => "software.amazon.awssdk.http"."SdkHttpConfigurationOptions";
    stax_response_handler => "software.amazon.awssdk.http"."StaxResponseHandler";

    api_gateway_client_handler => "software.amazon.awssdk.opensdk.protect.client"."SdkClientHandler";

    json_client_metadata => "software.amazon.awssdk.protocol.json"."JsonClientMetadata";
    json_error_response_metadata => "software.amazon.awssdk.protocol.json"."JsonErrorResponseMetadata";
    json_error_shape_metadata => "software.amazon.awssdk.protocol.json"."JsonErrorShapeMetadata";
    json_operation_metadata => "software.amazon.awssdk.protocol.json"."JsonOperationMetadata";
    sdk_json_protocol_factory => "software.amazon.awssdk.protocol.json"."SdkJsonProtocolFactory";

    service_metadata => "software.amazon.awssdk.regions"."ServiceMetadata";
    signer_provider => "software.amazon.awssdk.runtime.auth"."SignerProvider";

    standard_error_unmarshaller => "software.amazon.awssdk.runtime.transform"."StandardErrorUnmarshaller";
    unmarshaller => "software.amazon.awssdk.runtime.transform"."Unmarshaller";
    void_stax_unmarshaller => "software.amazon.awssdk.runtime.transform"."VoidStaxUnmarshaller";

    array_list => "java.util"."ArrayList";
    arrays => "java.util"."Arrays";
    list => "java.util"."List";
    completable_future => "java.util.concurrent"."CompletableFuture";
    executor_service => "java.util.concurrent"."ExecutorService";
    node => "org.w3c.dom"."Node";
}

/// `java.lang.UnsupportedOperationException`.
pub fn unsupported_operation_exception() -> ClassName {
    ClassName::java_lang("UnsupportedOperationException")
}

/// `java.lang.AutoCloseable`.
pub fn auto_closeable() -> ClassName { ClassName::java_lang("AutoCloseable") }

/// `java.lang.Exception`.
pub fn exception() -> ClassName { ClassName::java_lang("Exception") }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_handlers_differ_only_by_package() {
        assert_eq!(sdk_client_handler().simple_name(), api_gateway_client_handler().simple_name());
        assert_ne!(sdk_client_handler(), api_gateway_client_handler());
    }

    #[test]
    fn test_nested_builder_types() {
        let builder = client_security_configuration().nested("Builder");
        assert_eq!(
            builder.canonical_name(),
            "software.amazon.awssdk.config.ClientSecurityConfiguration.Builder"
        );
    }
}
