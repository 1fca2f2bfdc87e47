/// A capability inferred from a non-trivial named method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Start,
    OnStart,
    Reset,
    OnReset,
    Split,
    LoadRemoval,
    Startup,
    Update,
    Init,
    GameTime,
}

impl Feature {
    /// Every feature in display order.
    pub const ALL: [Feature; 10] = [
        Feature::Start,
        Feature::OnStart,
        Feature::Reset,
        Feature::OnReset,
        Feature::Split,
        Feature::LoadRemoval,
        Feature::Startup,
        Feature::Update,
        Feature::Init,
        Feature::GameTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Feature::Start => "Start",
            Feature::OnStart => "On Start",
            Feature::Reset => "Reset",
            Feature::OnReset => "On Reset",
            Feature::Split => "Split",
            Feature::LoadRemoval => "Load Removal",
            Feature::Startup => "Startup",
            Feature::Update => "Update",
            Feature::Init => "Init",
            Feature::GameTime => "Game Time",
        }
    }

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A capability inferred from a raw substring anywhere in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Behaviour {
    SignatureScanner,
    DetectsVersions,
    WritesMemory,
    MemoryWatcher,
    DebugOutput,
    Comments,
    Settings,
    Functions,
    MemoryPages,
}

impl Behaviour {
    /// Every behaviour in display order.
    pub const ALL: [Behaviour; 9] = [
        Behaviour::SignatureScanner,
        Behaviour::DetectsVersions,
        Behaviour::WritesMemory,
        Behaviour::MemoryWatcher,
        Behaviour::DebugOutput,
        Behaviour::Comments,
        Behaviour::Settings,
        Behaviour::Functions,
        Behaviour::MemoryPages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Behaviour::SignatureScanner => "SignatureScanner",
            Behaviour::DetectsVersions => "Detects Versions",
            Behaviour::WritesMemory => "Writes Memory",
            Behaviour::MemoryWatcher => "Memory Watcher",
            Behaviour::DebugOutput => "Debug Output",
            Behaviour::Comments => "Comments",
            Behaviour::Settings => "Settings",
            Behaviour::Functions => "Functions",
            Behaviour::MemoryPages => "Memory Pages",
        }
    }

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl std::fmt::Display for Behaviour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed-capacity set of features. Iterates in `Feature::ALL` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FeatureSet(u16);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `feature`; returns `false` if it was already present.
    pub fn insert(&mut self, feature: Feature) -> bool {
        let present = self.contains(feature);
        self.0 |= feature.bit();
        !present
    }

    /// Removes `feature`; returns `true` if it was present.
    pub fn remove(&mut self, feature: Feature) -> bool {
        let present = self.contains(feature);
        self.0 &= !feature.bit();
        present
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> {
        let set = *self;
        Feature::ALL.into_iter().filter(move |f| set.contains(*f))
    }

    pub fn labels(&self) -> Vec<String> {
        self.iter().map(|f| f.label().to_string()).collect()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut set = FeatureSet::new();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

/// Fixed-capacity set of behaviours. Iterates in `Behaviour::ALL` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BehaviourSet(u16);

impl BehaviourSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `behaviour`; returns `false` if it was already present.
    pub fn insert(&mut self, behaviour: Behaviour) -> bool {
        let present = self.contains(behaviour);
        self.0 |= behaviour.bit();
        !present
    }

    pub fn contains(&self, behaviour: Behaviour) -> bool {
        self.0 & behaviour.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Behaviour> {
        let set = *self;
        Behaviour::ALL.into_iter().filter(move |b| set.contains(*b))
    }

    pub fn labels(&self) -> Vec<String> {
        self.iter().map(|b| b.label().to_string()).collect()
    }
}

impl FromIterator<Behaviour> for BehaviourSet {
    fn from_iter<I: IntoIterator<Item = Behaviour>>(iter: I) -> Self {
        let mut set = BehaviourSet::new();
        for behaviour in iter {
            set.insert(behaviour);
        }
        set
    }
}

/// Everything derived from one script's source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSignals {
    pub features: FeatureSet,
    pub behaviours: BehaviourSet,
    /// Non-blank, non-comment lines. Informational only.
    pub loc: u32,
    pub complexity: u32,
}
