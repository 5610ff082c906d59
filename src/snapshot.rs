use {
    crate::{
        driver::DriverError,
        provider::CapabilityProvider,
        record::{
            DeviceProperties, ExtensionProperties, Features, InstanceInfo, LayerProperties,
            ListEntry, MemoryProperties, QueueFamilyProperties, Record, UnknownEnumValue, Value,
        },
    },
    log::{debug, trace, warn},
    serde::{Serialize, Serializer},
    std::{
        error::Error,
        fmt::{Display, Formatter},
        str::FromStr,
    },
};

/// A category of capabilities; each category becomes one group of a [`Snapshot`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    InstanceInfo,
    DeviceProperties,
    DeviceLimits,
    SparseProperties,
    Features,
    MemoryProperties,
    MemoryHeapProperties,
    QueueFamilyProperties,
    InstanceExtensions,
    InstanceLayers,
    DeviceExtensions,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 11] = [
        Self::InstanceInfo,
        Self::DeviceProperties,
        Self::DeviceLimits,
        Self::SparseProperties,
        Self::Features,
        Self::MemoryProperties,
        Self::MemoryHeapProperties,
        Self::QueueFamilyProperties,
        Self::InstanceExtensions,
        Self::InstanceLayers,
        Self::DeviceExtensions,
    ];

    /// The categories shown when none are requested: everything except the extension and layer
    /// lists.
    pub const DEFAULT: [Self; 8] = [
        Self::InstanceInfo,
        Self::DeviceProperties,
        Self::DeviceLimits,
        Self::SparseProperties,
        Self::Features,
        Self::MemoryProperties,
        Self::MemoryHeapProperties,
        Self::QueueFamilyProperties,
    ];

    /// Returns the category whose record contains the record of this category, if any.
    pub const fn dependency(self) -> Option<Self> {
        match self {
            Self::DeviceLimits | Self::SparseProperties => Some(Self::DeviceProperties),
            Self::MemoryHeapProperties => Some(Self::MemoryProperties),
            _ => None,
        }
    }

    /// Returns the display label of the group built for this category.
    pub const fn label(self) -> &'static str {
        match self {
            Self::InstanceInfo => "Instance Info",
            Self::DeviceProperties => "Physical Device Properties",
            Self::DeviceLimits => "Physical Device Limits",
            Self::SparseProperties => "Physical Device Sparse Properties",
            Self::Features => "Physical Device Features",
            Self::MemoryProperties => "Physical Device Memory Properties",
            Self::MemoryHeapProperties => "Physical Device Memory Heap Properties",
            Self::QueueFamilyProperties => "Physical Device Queue Family Properties",
            Self::InstanceExtensions => "Instance Extensions",
            Self::InstanceLayers => "Instance Layers",
            Self::DeviceExtensions => "Device Extensions",
        }
    }

    /// Returns the short name of this category, as accepted by [`Category::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::InstanceInfo => "instance-info",
            Self::DeviceProperties => "device-properties",
            Self::DeviceLimits => "device-limits",
            Self::SparseProperties => "sparse-properties",
            Self::Features => "features",
            Self::MemoryProperties => "memory-properties",
            Self::MemoryHeapProperties => "memory-heap-properties",
            Self::QueueFamilyProperties => "queue-family-properties",
            Self::InstanceExtensions => "instance-extensions",
            Self::InstanceLayers => "instance-layers",
            Self::DeviceExtensions => "device-extensions",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// A category name which does not match any [`Category`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown category `{}` (expected one of: ", self.0)?;

        for (idx, category) in Category::ALL.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }

            f.write_str(category.name())?;
        }

        f.write_str(")")
    }
}

impl Error for UnknownCategory {}

/// One displayed `(name, value)` pair.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Row {
    label: String,
    value: String,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The labelled rows of one category.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct CapabilityGroup {
    category: Category,
    label: &'static str,
    rows: Vec<Row>,
}

impl CapabilityGroup {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the rows of this group in field declaration order.
    ///
    /// Empty when the category is not present on the provider.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl Display for CapabilityGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.label)?;

        if self.rows.is_empty() {
            return writeln!(f, "  (none)");
        }

        let label_width = self
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or_default();
        let value_width = self
            .rows
            .iter()
            .map(|row| row.value.chars().count())
            .max()
            .unwrap_or_default();

        for row in &self.rows {
            writeln!(
                f,
                "  {:<label_width$}  {:>value_width$}",
                row.label, row.value
            )?;
        }

        Ok(())
    }
}

/// An error found while building a [`Snapshot`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SnapshotError {
    /// The provider could not be queried; no snapshot was produced.
    ProviderUnavailable(DriverError),

    /// The record containing this category was not present, so its group has no rows.
    MissingDependency {
        category: Category,
        dependency: Category,
    },

    /// A field held an enumerated value with no known name; its row shows a placeholder.
    UnknownEnumValue {
        category: Category,
        field: String,
        ordinal: i32,
    },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProviderUnavailable(err) => write!(f, "capability provider unavailable: {err}"),
            Self::MissingDependency {
                category,
                dependency,
            } => write!(f, "{category} requires {dependency}, which is not present"),
            Self::UnknownEnumValue {
                category,
                field,
                ordinal,
            } => write!(f, "{category}: {field} has unknown value {ordinal}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ProviderUnavailable(err) => Some(err),
            _ => None,
        }
    }
}

impl Serialize for SnapshotError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The complete, ordered set of capability groups produced from one query pass.
///
/// A snapshot is fully materialized when built and never changes afterwards; query the provider
/// again to get fresh data.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    groups: Vec<CapabilityGroup>,
    errors: Vec<SnapshotError>,
}

impl Snapshot {
    /// Queries `provider` and builds one group per requested category, in the requested order.
    ///
    /// Categories whose record is nested inside another record (such as the device limits) query
    /// the containing record themselves; each provider source is queried at most once per build.
    ///
    /// Missing dependencies and unknown enumerated values do not stop the build; they are
    /// collected in [`Snapshot::errors`]. Only an unavailable provider fails the whole build.
    #[profiling::function]
    pub fn build<P>(categories: &[Category], provider: &P) -> Result<Self, SnapshotError>
    where
        P: CapabilityProvider + ?Sized,
    {
        let mut sources = Sources::new(provider);
        let mut groups = Vec::with_capacity(categories.len());
        let mut errors = vec![];

        for &category in categories {
            trace!("building {category}");

            let rows = match sources.rows(category, &mut errors) {
                Ok(rows) => rows,
                Err(err) => {
                    warn!("{err}");

                    if !matches!(err, SnapshotError::MissingDependency { .. }) {
                        return Err(err);
                    }

                    errors.push(err);
                    vec![]
                }
            };

            groups.push(CapabilityGroup {
                category,
                label: category.label(),
                rows,
            });
        }

        debug!(
            "built {} groups with {} errors",
            groups.len(),
            errors.len()
        );

        Ok(Self { groups, errors })
    }

    /// Returns the group built for `category`, if it was requested.
    pub fn group(&self, category: Category) -> Option<&CapabilityGroup> {
        self.groups.iter().find(|group| group.category == category)
    }

    pub fn groups(&self) -> &[CapabilityGroup] {
        &self.groups
    }

    /// Returns the non-fatal errors found while building, in the order they were found.
    pub fn errors(&self) -> &[SnapshotError] {
        &self.errors
    }

    /// Returns `true` if no non-fatal errors were recorded while building.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, group) in self.groups.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }

            Display::fmt(group, f)?;
        }

        Ok(())
    }
}

/// Builds a snapshot; see [`Snapshot::build`].
pub fn build_snapshot<P>(categories: &[Category], provider: &P) -> Result<Snapshot, SnapshotError>
where
    P: CapabilityProvider + ?Sized,
{
    Snapshot::build(categories, provider)
}

/// Caches each provider answer for the duration of one build.
struct Sources<'a, P>
where
    P: ?Sized,
{
    provider: &'a P,
    instance_info: Option<Option<InstanceInfo>>,
    device_properties: Option<Option<DeviceProperties>>,
    features: Option<Option<Features>>,
    memory_properties: Option<Option<MemoryProperties>>,
    queue_family_properties: Option<Option<Vec<QueueFamilyProperties>>>,
    instance_extensions: Option<Option<Vec<ExtensionProperties>>>,
    instance_layers: Option<Option<Vec<LayerProperties>>>,
    device_extensions: Option<Option<Vec<ExtensionProperties>>>,
}

impl<'a, P> Sources<'a, P>
where
    P: CapabilityProvider + ?Sized,
{
    fn new(provider: &'a P) -> Self {
        Self {
            provider,
            instance_info: None,
            device_properties: None,
            features: None,
            memory_properties: None,
            queue_family_properties: None,
            instance_extensions: None,
            instance_layers: None,
            device_extensions: None,
        }
    }

    fn rows(
        &mut self,
        category: Category,
        errors: &mut Vec<SnapshotError>,
    ) -> Result<Vec<Row>, SnapshotError> {
        if let Some(dependency) = category.dependency() {
            if !self.is_present(dependency)? {
                return Err(SnapshotError::MissingDependency {
                    category,
                    dependency,
                });
            }
        }

        let provider = self.provider;
        let mut rows = Rows {
            category,
            errors,
            rows: vec![],
        };

        match category {
            Category::InstanceInfo => {
                if let Some(info) = cached(&mut self.instance_info, || provider.instance_info())? {
                    rows.record(None, info);
                }
            }
            Category::DeviceProperties => {
                if let Some(props) = cached(&mut self.device_properties, || {
                    provider.device_properties()
                })? {
                    rows.record(None, props);
                }
            }
            Category::DeviceLimits => {
                if let Some(props) = cached(&mut self.device_properties, || {
                    provider.device_properties()
                })? {
                    rows.record(None, &props.limits);
                }
            }
            Category::SparseProperties => {
                if let Some(props) = cached(&mut self.device_properties, || {
                    provider.device_properties()
                })? {
                    rows.record(None, &props.sparse_properties);
                }
            }
            Category::Features => {
                if let Some(features) = cached(&mut self.features, || provider.features())? {
                    rows.record(None, features);
                }
            }
            Category::MemoryProperties => {
                if let Some(props) = cached(&mut self.memory_properties, || {
                    provider.memory_properties()
                })? {
                    rows.record(None, props);
                    rows.entries(&props.memory_types);
                }
            }
            Category::MemoryHeapProperties => {
                if let Some(props) = cached(&mut self.memory_properties, || {
                    provider.memory_properties()
                })? {
                    rows.entries(&props.memory_heaps);
                }
            }
            Category::QueueFamilyProperties => {
                if let Some(queue_families) = cached(&mut self.queue_family_properties, || {
                    provider.queue_family_properties()
                })? {
                    rows.entries(queue_families);
                }
            }
            Category::InstanceExtensions => {
                if let Some(extensions) = cached(&mut self.instance_extensions, || {
                    provider.instance_extensions()
                })? {
                    rows.entries(extensions);
                }
            }
            Category::InstanceLayers => {
                if let Some(layers) =
                    cached(&mut self.instance_layers, || provider.instance_layers())?
                {
                    rows.entries(layers);
                }
            }
            Category::DeviceExtensions => {
                if let Some(extensions) = cached(&mut self.device_extensions, || {
                    provider.device_extensions()
                })? {
                    rows.entries(extensions);
                }
            }
        }

        Ok(rows.rows)
    }

    /// Returns `true` if the provider reports the record of `category`.
    fn is_present(&mut self, category: Category) -> Result<bool, SnapshotError> {
        let provider = self.provider;

        Ok(match category {
            Category::InstanceInfo => {
                cached(&mut self.instance_info, || provider.instance_info())?.is_some()
            }
            Category::DeviceProperties | Category::DeviceLimits | Category::SparseProperties => {
                cached(&mut self.device_properties, || provider.device_properties())?.is_some()
            }
            Category::Features => cached(&mut self.features, || provider.features())?.is_some(),
            Category::MemoryProperties | Category::MemoryHeapProperties => {
                cached(&mut self.memory_properties, || provider.memory_properties())?.is_some()
            }
            Category::QueueFamilyProperties => cached(&mut self.queue_family_properties, || {
                provider.queue_family_properties()
            })?
            .is_some(),
            Category::InstanceExtensions => {
                cached(&mut self.instance_extensions, || provider.instance_extensions())?
                    .is_some()
            }
            Category::InstanceLayers => {
                cached(&mut self.instance_layers, || provider.instance_layers())?.is_some()
            }
            Category::DeviceExtensions => {
                cached(&mut self.device_extensions, || provider.device_extensions())?.is_some()
            }
        })
    }
}

fn cached<T>(
    slot: &mut Option<Option<T>>,
    query: impl FnOnce() -> Result<Option<T>, DriverError>,
) -> Result<Option<&T>, SnapshotError> {
    if slot.is_none() {
        *slot = Some(query().map_err(SnapshotError::ProviderUnavailable)?);
    }

    Ok(slot.as_ref().and_then(Option::as_ref))
}

/// Formats record fields into the rows of one group.
struct Rows<'e> {
    category: Category,
    errors: &'e mut Vec<SnapshotError>,
    rows: Vec<Row>,
}

impl Rows<'_> {
    fn entries<R>(&mut self, entries: &[R])
    where
        R: ListEntry,
    {
        for (idx, entry) in entries.iter().enumerate() {
            self.record(Some(entry.entry_label(idx).as_str()), entry);
        }
    }

    fn record<R>(&mut self, prefix: Option<&str>, record: &R)
    where
        R: Record,
    {
        for (label, value) in record.values() {
            let label = match prefix {
                Some(prefix) => format!("{prefix}: {label}"),
                None => label.to_owned(),
            };
            let value = self.format(&label, &value);

            self.rows.push(Row { label, value });
        }
    }

    fn format(&mut self, label: &str, value: &Value) -> String {
        match value.format() {
            Ok(value) => value,
            Err(UnknownEnumValue { ordinal }) => {
                let err = SnapshotError::UnknownEnumValue {
                    category: self.category,
                    field: label.to_owned(),
                    ordinal,
                };

                warn!("{err}");

                self.errors.push(err);

                format!("Unknown ({ordinal})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            provider::RecordedProvider,
            record::{DeviceLimits, DeviceType, MemoryHeap, MemoryType, SparseProperties},
        },
        std::cell::Cell,
    };

    fn adreno() -> RecordedProvider {
        RecordedProvider {
            instance_info: Some(InstanceInfo {
                app_name: "Vulkan Info App".to_owned(),
                engine_name: "No engine".to_owned(),
                api_version: 4198400,
                device_count: 1,
            }),
            device_properties: Some(DeviceProperties {
                api_version: 4198400,
                driver_version: 2149646336,
                vendor_id: 0x5143,
                device_id: 0x6040001,
                device_type: DeviceType(1),
                device_name: "Adreno 640".to_owned(),
                limits: DeviceLimits {
                    max_viewport_dimensions: [4096, 4096],
                    ..Default::default()
                },
                sparse_properties: SparseProperties::default(),
            }),
            features: Some(Features {
                geometry_shader: false,
                sampler_anisotropy: true,
                ..Default::default()
            }),
            memory_properties: Some(MemoryProperties {
                memory_types: vec![MemoryType::default(); 2],
                memory_heaps: vec![MemoryHeap {
                    size: 1 << 30,
                    ..Default::default()
                }],
            }),
            queue_family_properties: Some(vec![QueueFamilyProperties::default(); 3]),
            ..Default::default()
        }
    }

    fn value<'a>(snapshot: &'a Snapshot, category: Category, label: &str) -> Option<&'a str> {
        snapshot
            .group(category)?
            .rows()
            .iter()
            .find(|row| row.label() == label)
            .map(Row::value)
    }

    /// Counts the queries made of the wrapped provider.
    struct Counting {
        inner: RecordedProvider,
        device_properties: Cell<usize>,
        memory_properties: Cell<usize>,
    }

    impl CapabilityProvider for Counting {
        fn instance_info(&self) -> Result<Option<InstanceInfo>, DriverError> {
            self.inner.instance_info()
        }

        fn device_properties(&self) -> Result<Option<DeviceProperties>, DriverError> {
            self.device_properties.set(self.device_properties.get() + 1);
            self.inner.device_properties()
        }

        fn features(&self) -> Result<Option<Features>, DriverError> {
            self.inner.features()
        }

        fn memory_properties(&self) -> Result<Option<MemoryProperties>, DriverError> {
            self.memory_properties.set(self.memory_properties.get() + 1);
            self.inner.memory_properties()
        }

        fn queue_family_properties(
            &self,
        ) -> Result<Option<Vec<QueueFamilyProperties>>, DriverError> {
            self.inner.queue_family_properties()
        }
    }

    struct Unavailable;

    impl CapabilityProvider for Unavailable {
        fn instance_info(&self) -> Result<Option<InstanceInfo>, DriverError> {
            Err(DriverError::Unsupported)
        }

        fn device_properties(&self) -> Result<Option<DeviceProperties>, DriverError> {
            Err(DriverError::Unsupported)
        }

        fn features(&self) -> Result<Option<Features>, DriverError> {
            Err(DriverError::Unsupported)
        }

        fn memory_properties(&self) -> Result<Option<MemoryProperties>, DriverError> {
            Err(DriverError::Unsupported)
        }

        fn queue_family_properties(
            &self,
        ) -> Result<Option<Vec<QueueFamilyProperties>>, DriverError> {
            Err(DriverError::Unsupported)
        }
    }

    #[test]
    pub fn one_group_per_category_in_order() {
        let provider = adreno();
        let requests: [&[Category]; 4] = [
            &Category::ALL,
            &Category::DEFAULT,
            &[Category::Features, Category::InstanceInfo],
            &[],
        ];

        for categories in requests {
            let snapshot = Snapshot::build(categories, &provider).unwrap();
            let built = snapshot
                .groups()
                .iter()
                .map(CapabilityGroup::category)
                .collect::<Vec<_>>();

            assert_eq!(built, categories);
        }
    }

    #[test]
    pub fn duplicate_categories_are_built_again() {
        let categories = [Category::Features, Category::Features];
        let snapshot = Snapshot::build(&categories, &adreno()).unwrap();

        assert_eq!(snapshot.groups().len(), 2);
        assert_eq!(snapshot.groups()[0], snapshot.groups()[1]);
    }

    #[test]
    pub fn idempotent() {
        let provider = adreno();
        let lhs = Snapshot::build(&Category::ALL, &provider).unwrap();
        let rhs = build_snapshot(&Category::ALL, &provider).unwrap();

        assert_eq!(lhs, rhs);
        assert_eq!(lhs.to_string(), rhs.to_string());
    }

    #[test]
    pub fn nothing_present() {
        let snapshot = Snapshot::build(&Category::ALL, &RecordedProvider::default()).unwrap();

        assert_eq!(snapshot.groups().len(), Category::ALL.len());

        for group in snapshot.groups() {
            assert_eq!(group.label(), group.category().label());
            assert!(group.rows().is_empty());
        }

        // Nested records cannot be found without their containing record
        assert_eq!(
            snapshot.errors(),
            [
                SnapshotError::MissingDependency {
                    category: Category::DeviceLimits,
                    dependency: Category::DeviceProperties,
                },
                SnapshotError::MissingDependency {
                    category: Category::SparseProperties,
                    dependency: Category::DeviceProperties,
                },
                SnapshotError::MissingDependency {
                    category: Category::MemoryHeapProperties,
                    dependency: Category::MemoryProperties,
                },
            ]
        );
    }

    #[test]
    pub fn missing_dependency_does_not_stop_siblings() {
        let provider = RecordedProvider {
            device_properties: None,
            ..adreno()
        };
        let categories = [
            Category::DeviceLimits,
            Category::Features,
            Category::SparseProperties,
        ];
        let snapshot = Snapshot::build(&categories, &provider).unwrap();

        assert!(snapshot.groups()[0].rows().is_empty());
        assert_eq!(snapshot.groups()[1].rows().len(), 55);
        assert!(snapshot.groups()[2].rows().is_empty());
        assert_eq!(snapshot.errors().len(), 2);
        assert!(!snapshot.is_complete());
    }

    #[test]
    pub fn dependencies_are_queried_once() {
        let provider = Counting {
            inner: adreno(),
            device_properties: Cell::new(0),
            memory_properties: Cell::new(0),
        };
        let snapshot = Snapshot::build(&Category::ALL, &provider).unwrap();

        assert!(snapshot.is_complete());
        assert_eq!(provider.device_properties.get(), 1);
        assert_eq!(provider.memory_properties.get(), 1);
    }

    #[test]
    pub fn provider_unavailable() {
        assert_eq!(
            Snapshot::build(&Category::DEFAULT, &Unavailable),
            Err(SnapshotError::ProviderUnavailable(DriverError::Unsupported))
        );

        // Nothing is queried when nothing is requested
        assert!(Snapshot::build(&[], &Unavailable).unwrap().groups().is_empty());
    }

    #[test]
    pub fn device_properties() {
        let snapshot = Snapshot::build(&[Category::DeviceProperties], &adreno()).unwrap();
        let group = &snapshot.groups()[0];

        assert_eq!(group.label(), "Physical Device Properties");
        assert_eq!(
            group.rows(),
            [
                Row::new("API Version", "4198400"),
                Row::new("Driver Version", "2149646336"),
                Row::new("Vendor ID", "20803"),
                Row::new("Device ID", "100925441"),
                Row::new("Device Type", "Integrated GPU"),
                Row::new("Device Name", "Adreno 640"),
            ]
        );
    }

    #[test]
    pub fn features_are_words() {
        let snapshot = Snapshot::build(&[Category::Features], &adreno()).unwrap();

        assert_eq!(
            value(&snapshot, Category::Features, "Geometry shader"),
            Some("false")
        );
        assert_eq!(
            value(&snapshot, Category::Features, "Sampler anisotropy"),
            Some("true")
        );
        assert!(snapshot.groups()[0]
            .rows()
            .iter()
            .all(|row| row.value() == "true" || row.value() == "false"));
    }

    #[test]
    pub fn limit_tuples() {
        let snapshot = Snapshot::build(&[Category::DeviceLimits], &adreno()).unwrap();

        assert_eq!(snapshot.groups()[0].rows().len(), 106);
        assert_eq!(
            value(&snapshot, Category::DeviceLimits, "Max viewport dimensions"),
            Some("{4096, 4096}")
        );
        assert_eq!(
            value(&snapshot, Category::DeviceLimits, "Framebuffer color sample counts"),
            Some("{}")
        );
    }

    #[test]
    pub fn unknown_device_type() {
        let mut provider = adreno();
        provider.device_properties.as_mut().unwrap().device_type = DeviceType(99);

        let snapshot = Snapshot::build(&[Category::DeviceProperties], &provider).unwrap();

        assert_eq!(snapshot.groups()[0].rows().len(), 6);
        assert_eq!(
            value(&snapshot, Category::DeviceProperties, "Device Type"),
            Some("Unknown (99)")
        );
        assert_eq!(
            value(&snapshot, Category::DeviceProperties, "Device Name"),
            Some("Adreno 640")
        );
        assert_eq!(
            snapshot.errors(),
            [SnapshotError::UnknownEnumValue {
                category: Category::DeviceProperties,
                field: "Device Type".to_owned(),
                ordinal: 99,
            }]
        );
    }

    #[test]
    pub fn absent_queue_families() {
        let provider = RecordedProvider {
            queue_family_properties: None,
            ..adreno()
        };
        let snapshot = Snapshot::build(&[Category::QueueFamilyProperties], &provider).unwrap();

        assert_eq!(
            snapshot.groups()[0].label(),
            "Physical Device Queue Family Properties"
        );
        assert!(snapshot.groups()[0].rows().is_empty());
        assert!(snapshot.is_complete());
    }

    #[test]
    pub fn list_entries_are_prefixed() {
        let snapshot = Snapshot::build(
            &[
                Category::MemoryProperties,
                Category::MemoryHeapProperties,
                Category::QueueFamilyProperties,
            ],
            &adreno(),
        )
        .unwrap();

        assert_eq!(
            snapshot.groups()[0]
                .rows()
                .iter()
                .map(Row::label)
                .collect::<Vec<_>>(),
            [
                "Memory type count",
                "Memory heap count",
                "Memory type 0: Property flags",
                "Memory type 0: Heap index",
                "Memory type 1: Property flags",
                "Memory type 1: Heap index",
            ]
        );
        assert_eq!(
            snapshot.groups()[1].rows(),
            [
                Row::new("Memory heap 0: Size", "1073741824"),
                Row::new("Memory heap 0: Flags", "{}"),
            ]
        );
        assert_eq!(snapshot.groups()[2].rows().len(), 12);
        assert_eq!(
            snapshot.groups()[2].rows()[8].label(),
            "Queue family 2: Queue flags"
        );
    }

    #[test]
    pub fn extensions_are_labelled_by_name() {
        let provider = RecordedProvider {
            instance_extensions: Some(vec![ExtensionProperties {
                name: "VK_KHR_surface".to_owned(),
                spec_version: 25,
            }]),
            ..adreno()
        };
        let snapshot = Snapshot::build(&[Category::InstanceExtensions], &provider).unwrap();

        assert_eq!(
            snapshot.groups()[0].rows(),
            [Row::new("VK_KHR_surface: Spec version", "25")]
        );
    }

    #[test]
    pub fn capture_replays() {
        let provider = adreno();
        let captured = RecordedProvider::capture(&provider).unwrap();

        assert_eq!(captured, provider);
        assert_eq!(
            Snapshot::build(&Category::ALL, &captured),
            Snapshot::build(&Category::ALL, &provider)
        );
        assert_eq!(
            RecordedProvider::capture(&Unavailable),
            Err(DriverError::Unsupported)
        );
    }

    #[test]
    pub fn text_table() {
        let provider = RecordedProvider {
            instance_info: Some(InstanceInfo {
                app_name: "app".to_owned(),
                engine_name: "engine".to_owned(),
                api_version: 4194304,
                device_count: 12,
            }),
            ..Default::default()
        };
        let snapshot =
            Snapshot::build(&[Category::InstanceInfo, Category::Features], &provider).unwrap();

        assert_eq!(
            snapshot.to_string(),
            "Instance Info\n\
             \x20 Application name          app\n\
             \x20 Engine name            engine\n\
             \x20 Instance API version  4194304\n\
             \x20 Number of devices          12\n\
             \n\
             Physical Device Features\n\
             \x20 (none)\n"
        );
    }

    #[test]
    pub fn categories_parse() {
        for category in Category::ALL {
            assert_eq!(category.name().parse(), Ok(category));
        }

        assert_eq!("Device-Limits".parse(), Ok(Category::DeviceLimits));
        assert_eq!(
            "limits".parse::<Category>(),
            Err(UnknownCategory("limits".to_owned()))
        );
    }

    #[test]
    pub fn dependencies() {
        for category in Category::ALL {
            if let Some(dependency) = category.dependency() {
                assert_eq!(dependency.dependency(), None);
            }
        }

        assert_eq!(
            Category::SparseProperties.dependency(),
            Some(Category::DeviceProperties)
        );
    }

    #[test]
    pub fn missing_dependency_names_the_containing_category() {
        for category in Category::ALL {
            let snapshot = Snapshot::build(&[category], &RecordedProvider::default()).unwrap();
            let expected = category
                .dependency()
                .map(|dependency| SnapshotError::MissingDependency {
                    category,
                    dependency,
                })
                .into_iter()
                .collect::<Vec<_>>();

            assert_eq!(snapshot.errors(), expected);
            assert_eq!(snapshot.is_complete(), expected.is_empty());
        }
    }
}
