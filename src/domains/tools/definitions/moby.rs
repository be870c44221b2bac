//! Moby tool definition.
//!
//! The `moby` tool forwards a natural-language question about e-commerce
//! performance to Triple Whale's Moby agent and returns the agent's JSON
//! answer pretty-printed as text content.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::moby::MobyClient;
use crate::domains::tools::catalog::ToolDescriptor;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the moby tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MobyParams {
    /// A question about e-commerce data like spend
    pub question: String,

    /// shopId that is used to fetch data
    pub shop_id: String,
}

impl MobyParams {
    /// Reject blank values that would pass schema validation.
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("'question' must be a non-empty string".to_string());
        }
        if self.shop_id.trim().is_empty() {
            return Err("'shopId' must be a non-empty string".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Moby tool - answers e-commerce analytics questions for a shop.
pub struct MobyTool;

impl MobyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "moby";

    /// MIME type of the tool's result content.
    pub const MIME_TYPE: &'static str = "application/json";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = r##"
<background>
moby tool helps users access e-commerce performance data.
the tool prompts the user to enter their **shopId**, which is then used for tool as input, shopId is must for this tool.
</background>

<response-handling>

<response-schema>
openapi: 3.1.0
info:
  title: Triple Whale GPT API
  description: Access e-commerce performance data using the Triple Whale Moby API.
  version: 1.0.0
servers:
  - url: https://api.triplewhale.com
    description: Production server
paths:
  /willy/moby-chat:
    post:
      operationId: answerMobyQuestion
      summary: Get an answer from the Triple Whale Moby API.
      description: Sends a user question to the API along with their shop ID and API key.
      security:
        - ApiKeyAuth: []
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: "#/components/schemas/QuestionRequest"
      responses:
        "200":
          description: Successfully retrieved the answer.
          content:
            application/json:
              schema:
                $ref: "#/components/schemas/SimplifiedMobyResponse"
        "400":
          description: Bad request (e.g., missing parameters).
        "403":
          description: Unauthorized, invalid API key.
        "500":
          description: Internal server error.
components:
  securitySchemes:
    ApiKeyAuth:
      type: apiKey
      in: header
      name: x-api-key
      description: User-provided API key in UUID format.
  schemas:
    QuestionRequest:
      type: object
      required:
        - shopId
        - question
      properties:
        shopId:
          type: string
          description: Shopify store ID
          example: example-store.com
        question:
          type: string
          description: The question to ask Triple Whale.
          example: What is my ROAS for Facebook campaigns in the last 60 days?
    SimplifiedMobyResponse:
      type: object
      properties:
        isError:
          type: boolean
          description: Indicates if the API request resulted in an error.
        error:
          type: string
          nullable: true
          description: Error message if `isError` is true.
        responses:
          type: array
          description: List of responses from the API.
          items:
            $ref: "#/components/schemas/SimplifiedResponse"
        assistantConclusion:
          type: string
          description: Final summary from the assistant.
    SimplifiedResponse:
      type: object
      properties:
        isError:
          type: boolean
        errorMsg:
          type: string
          nullable: true
        question:
          type: string
        answer:
          type: array
          description: The structured answer.
          items:
            type: object
            additionalProperties:
              oneOf:
                - type: string
                - type: number
                - type: "null"
        assistant:
          type: string
</response-schema>

- The tool parses the **responses** array and presents answers sequentially.
- If `isError` is `true` in any response, the entire message is considered an error, and the error message is displayed.
- The `assistantConclusion` is included at the end to summarize the results.

- **For each valid response:**
  - Show the **question**.
  - Present the **answer** data in a clear, structured format.
  - Mention that the data is available in the recommended visualization format (if provided in `assistant`).
  - If similar reports are suggested in the `assistant`, provide links.
  - Ask if the user needs further assistance using the assistantConclusion from the response.

</response-handling>

<error_handling>
- If `isError: true`, display the error message to the user.
- If the API returns `403 Unauthorized`, inform the user: "Invalid credentials. Please check your settings."
- If the `shopId` is missing, prompt the user to enter it.
- For other errors, respond with: "Something went wrong. Please try again later."
</error_handling>
"##;

    /// Catalog entry for this tool.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            input_schema: cached_schema_for_type::<MobyParams>(),
            mime_type: Self::MIME_TYPE,
        }
    }

    /// Execute the tool logic.
    ///
    /// The remote answer is passed through untouched: whatever JSON Moby
    /// returns is pretty-printed and wrapped in a single text content block.
    /// Remote failures surface as protocol errors so the client can report
    /// them; the server itself keeps serving.
    #[instrument(skip_all, fields(shop_id = %params.shop_id))]
    pub async fn execute(
        params: &MobyParams,
        client: &MobyClient,
    ) -> Result<CallToolResult, McpError> {
        info!("Moby tool called");

        let answer = client
            .ask(&params.question, &params.shop_id)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let text = serde_json::to_string_pretty(&answer)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(client: Arc<MobyClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::descriptor().to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: MobyParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                params
                    .validate()
                    .map_err(|e| McpError::invalid_params(e, None))?;
                Self::execute(&params, &client).await
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
