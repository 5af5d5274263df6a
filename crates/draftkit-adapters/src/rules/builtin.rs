//! Built-in manifest rules.
//!
//! Rules only look at Kubernetes workload documents; anything without a pod
//! template produces no findings.

use serde_yaml::Value;

use super::ManifestRule;

/// The pod spec of a workload document, if it has one.
fn pod_spec(doc: &Value) -> Option<&Value> {
    let spec = doc.get("spec")?;
    match doc.get("kind")?.as_str()? {
        "Pod" => Some(spec),
        "CronJob" => spec.get("jobTemplate")?.get("spec")?.get("template")?.get("spec"),
        _ => spec.get("template")?.get("spec"),
    }
}

/// `Kind/name` label used to prefix findings.
fn workload_label(doc: &Value) -> String {
    let kind = doc.get("kind").and_then(Value::as_str).unwrap_or("?");
    let name = doc
        .get("metadata")
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("?");
    format!("{kind}/{name}")
}

/// Every container and init container of a workload.
fn containers(doc: &Value) -> Vec<&Value> {
    let Some(spec) = pod_spec(doc) else {
        return Vec::new();
    };
    ["initContainers", "containers"]
        .iter()
        .filter_map(|key| spec.get(key).and_then(Value::as_sequence))
        .flatten()
        .collect()
}

fn container_name(container: &Value) -> &str {
    container.get("name").and_then(Value::as_str).unwrap_or("?")
}

// ── no-latest-tag ────────────────────────────────────────────────────────────

/// Images must be pinned to a tag other than `latest`, or to a digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatestTag;

fn is_pinned(image: &str) -> bool {
    if image.contains('@') {
        return true;
    }
    let last = image.rsplit('/').next().unwrap_or(image);
    match last.split_once(':') {
        Some((_, tag)) => !tag.is_empty() && tag != "latest",
        None => false,
    }
}

impl ManifestRule for NoLatestTag {
    fn id(&self) -> &'static str {
        "no-latest-tag"
    }

    fn check(&self, doc: &Value) -> Vec<String> {
        containers(doc)
            .into_iter()
            .filter_map(|c| {
                let image = c.get("image").and_then(Value::as_str)?;
                (!is_pinned(image)).then(|| {
                    format!(
                        "{}: container '{}' uses unpinned image '{image}'",
                        workload_label(doc),
                        container_name(c)
                    )
                })
            })
            .collect()
    }
}

// ── resource-limits ──────────────────────────────────────────────────────────

/// Every container declares `resources.limits`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceLimits;

impl ManifestRule for ResourceLimits {
    fn id(&self) -> &'static str {
        "resource-limits"
    }

    fn check(&self, doc: &Value) -> Vec<String> {
        containers(doc)
            .into_iter()
            .filter(|c| {
                c.get("resources")
                    .and_then(|r| r.get("limits"))
                    .and_then(Value::as_mapping)
                    .is_none_or(|limits| limits.is_empty())
            })
            .map(|c| {
                format!(
                    "{}: container '{}' has no resource limits",
                    workload_label(doc),
                    container_name(c)
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    const DEPLOYMENT: &str = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  template:
    spec:
      initContainers:
        - name: migrate
          image: example.com/migrate:1.2.0
          resources:
            limits: {cpu: 100m}
      containers:
        - name: app
          image: nginx:latest
        - name: sidecar
          image: registry:5000/envoy
          resources:
            limits:
              memory: 128Mi
"#;

    #[test]
    fn pinning() {
        assert!(is_pinned("nginx:1.27"));
        assert!(is_pinned("registry:5000/nginx:1.27"));
        assert!(is_pinned("nginx@sha256:abc"));
        assert!(!is_pinned("nginx"));
        assert!(!is_pinned("nginx:latest"));
        assert!(!is_pinned("registry:5000/nginx"));
    }

    #[test]
    fn latest_and_untagged_images_are_flagged() {
        let findings = NoLatestTag.check(&doc(DEPLOYMENT));
        assert_eq!(
            findings,
            vec![
                "Deployment/web: container 'app' uses unpinned image 'nginx:latest'",
                "Deployment/web: container 'sidecar' uses unpinned image 'registry:5000/envoy'",
            ]
        );
    }

    #[test]
    fn missing_limits_are_flagged() {
        let findings = ResourceLimits.check(&doc(DEPLOYMENT));
        assert_eq!(
            findings,
            vec!["Deployment/web: container 'app' has no resource limits"]
        );
    }

    #[test]
    fn cron_jobs_and_pods_are_inspected() {
        let cron = doc(
            r#"
kind: CronJob
metadata: {name: nightly}
spec:
  jobTemplate:
    spec:
      template:
        spec:
          containers: [{name: job, image: busybox}]
"#,
        );
        let pod = doc("kind: Pod\nmetadata: {name: p}\nspec:\n  containers: [{name: c, image: alpine}]\n");

        assert_eq!(NoLatestTag.check(&cron).len(), 1);
        assert_eq!(NoLatestTag.check(&pod).len(), 1);
    }

    #[test]
    fn non_workloads_are_ignored() {
        let svc = doc("kind: Service\nmetadata: {name: web}\nspec:\n  ports: [{port: 80}]\n");
        assert!(NoLatestTag.check(&svc).is_empty());
        assert!(ResourceLimits.check(&svc).is_empty());
        assert!(ResourceLimits.check(&doc("just: data")).is_empty());
    }
}
