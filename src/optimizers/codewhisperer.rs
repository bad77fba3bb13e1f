//! Amazon CodeWhisperer: AWS context, security, cloud-native patterns and
//! infrastructure as code. The vocabulary pass maps generic nouns onto AWS
//! services.

use super::{elevated, Capabilities, Optimizer};
use crate::analyzer::Intent;
use crate::registry::ToolId;
use crate::rules::{always, Block, Edit, Rule};

const AWS_CONTEXT: Block = Block::new(&[
    "# AWS Context:",
    "# - Use AWS SDKs and best practices",
    "# - Consider AWS service integrations",
    "# - Follow AWS security and compliance guidelines",
    "# - Use AWS-native patterns and architectures",
    "# - Consider cost optimization and resource management",
]);

const SECURITY: Block = Block::new(&[
    "# Security Considerations:",
    "# - Implement proper authentication and authorization",
    "# - Use AWS IAM roles and policies",
    "# - Follow the principle of least privilege",
    "# - Implement secure coding practices",
    "# - Use AWS security services (WAF, Shield, etc.)",
    "# - Encrypt data at rest and in transit",
])
// the AWS header above mentions security, so only the caller's words count
.unless_input(&["security"]);

const CLOUD_NATIVE: Block = Block::new(&[
    "# Cloud-Native Patterns:",
    "# - Use serverless architectures where appropriate",
    "# - Implement microservices patterns",
    "# - Use event-driven architectures",
    "# - Consider auto-scaling and load balancing",
    "# - Implement proper monitoring and logging",
    "# - Use managed services over self-hosted solutions",
]);

const SERVICE_INTEGRATIONS: Block = Block::new(&[
    "# AWS Service Integrations:",
    "# - Consider appropriate AWS services for your use case",
    "# - Use Lambda for serverless functions",
    "# - Use S3 for object storage",
    "# - Use DynamoDB for NoSQL databases",
    "# - Use API Gateway for REST APIs",
    "# - Use CloudFormation or CDK for infrastructure",
]);

const INFRASTRUCTURE: Block = Block::new(&[
    "# Infrastructure Considerations:",
    "# - Use Infrastructure as Code (CloudFormation, CDK, Terraform)",
    "# - Implement proper CI/CD pipelines",
    "# - Use AWS CodePipeline or GitHub Actions",
    "# - Consider multi-region deployment",
    "# - Implement proper backup and disaster recovery",
    "# - Use AWS CloudWatch for monitoring",
]);

const VOCABULARY: &[(&str, &str)] = &[
    ("database", "AWS RDS or DynamoDB depending on requirements"),
    ("storage", "AWS S3 for object storage"),
    ("compute", "AWS Lambda for serverless or EC2 for traditional"),
    ("api", "AWS API Gateway with Lambda or ECS"),
    ("deploy", "deploy using AWS CodePipeline or AWS CLI"),
    ("monitor", "use AWS CloudWatch for monitoring and logging"),
];

static RULES: [Rule; 6] = [
    Rule {
        step: "Added AWS context",
        reason: "CodeWhisperer excels at AWS service integrations and cloud-native development",
        guard: |i| !i.features.has_aws_context,
        edit: Edit::Prepend(AWS_CONTEXT),
    },
    Rule {
        step: "Added security guidance",
        reason: "CodeWhisperer includes security best practices and AWS security patterns",
        guard: |i| !i.features.has_security,
        edit: Edit::Append(SECURITY),
    },
    Rule {
        step: "Added cloud-native patterns",
        reason: "CodeWhisperer can suggest optimal cloud architecture and patterns",
        guard: |i| i.features.intent == Intent::CloudDevelopment,
        edit: Edit::Append(CLOUD_NATIVE),
    },
    Rule {
        step: "Added AWS service integrations",
        reason: "CodeWhisperer can suggest appropriate AWS services and integration patterns",
        guard: elevated,
        edit: Edit::Append(SERVICE_INTEGRATIONS),
    },
    Rule {
        step: "Added infrastructure guidance",
        reason: "CodeWhisperer can help with Infrastructure as Code and AWS resource management",
        guard: |i| i.features.intent == Intent::Infrastructure,
        edit: Edit::Append(INFRASTRUCTURE),
    },
    Rule {
        step: "Optimized language",
        reason: "Used CodeWhisperer-specific language patterns for better understanding",
        guard: always,
        edit: Edit::Replace(VOCABULARY),
    },
];

pub static CODEWHISPERER: Optimizer = Optimizer::new(
    ToolId::CodeWhisperer,
    "Amazon CodeWhisperer",
    &RULES,
    Capabilities {
        strengths: &[
            "AWS service integrations",
            "Security-focused development",
            "Cloud-native patterns",
            "AWS best practices",
            "Infrastructure as Code",
            "Cost optimization",
        ],
        best_for: &[
            "AWS application development",
            "Cloud-native applications",
            "Security-critical applications",
            "Infrastructure automation",
            "AWS service integration",
        ],
        limitations: &[
            "Primarily focused on AWS ecosystem",
            "May not be optimal for non-AWS development",
            "Requires AWS knowledge for best results",
        ],
        optimization_focus: &[
            "AWS service selection",
            "Security best practices",
            "Cloud-native patterns",
            "Infrastructure as Code",
            "Cost optimization strategies",
        ],
        documentation: &[],
    },
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn test_database_app() {
        let text = "Build a database for my app";
        let out = CODEWHISPERER.optimize(text, &analyze(text));

        assert!(out.text.starts_with("# AWS Context:"));
        assert!(out.text.contains("# Security Considerations:"));
        assert!(out
            .text
            .contains("Build a AWS RDS or DynamoDB depending on requirements for my app"));
        assert!(!out.text.contains("a database"));
        assert_eq!(
            out.explanation.summary,
            vec!["Optimized prompt for Amazon CodeWhisperer with 3 improvements"]
        );
    }

    #[test]
    fn test_aws_security_prompt_keeps_quiet() {
        let text = "lambda with security review";
        let out = CODEWHISPERER.optimize(text, &analyze(text));
        assert!(!out.text.contains("# AWS Context:"));
        assert!(!out.text.contains("# Security Considerations:"));
        assert_eq!(out.explanation.steps.len(), 1);
    }

    #[test]
    fn test_infrastructure_prompt() {
        let text = "Provision infrastructure for several queues";
        let out = CODEWHISPERER.optimize(text, &analyze(text));
        assert!(out.text.contains("# AWS Service Integrations:"));
        assert!(out.text.contains("# Infrastructure Considerations:"));
        assert!(!out.text.contains("# Cloud-Native Patterns:"));
    }
}
