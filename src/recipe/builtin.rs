// src/recipe/builtin.rs
//! The built-in Amanzi recipe
//!
//! The same declarations are expressible as a TOML recipe file; this
//! constructor is what commands fall back to when no file is given.

use crate::recipe::{
    ConflictRule, DependencyDecl, DependencyKind, OptionDecision, PatchDecl, Predicate, Recipe,
    ReleaseDecl, ReleaseVersion, VariantDecl, VersionSelector,
};

/// Build the Amanzi recipe
pub fn amanzi() -> Recipe {
    let mut recipe = Recipe::new(
        "amanzi",
        "Multi-Process HPC simulator for flow and reactive transport",
    );
    recipe.homepage = Some("http://www.amanzi.github.io".to_string());
    recipe.git = Some("https://github.com/amanzi/amanzi".to_string());
    recipe.maintainers = vec!["julienloiseau".to_string()];

    // Submodules stay on so the ATS checkout comes along
    recipe.releases = vec![
        ReleaseDecl::branch("master", "master")
            .with_submodules()
            .as_default(),
        ReleaseDecl::tag("1.1-dev", "amanzi-1.1-dev").with_submodules(),
        ReleaseDecl::tag("1.0.0", "amanzi-1.0.0").with_submodules(),
    ];

    recipe.variants = vec![
        VariantDecl::switch("eptra", "Enable Epetra support", true),
        VariantDecl::switch("tpetra", "Enable Tpetra support", false),
        VariantDecl::selector(
            "mesh_type",
            "Select mesh type: unstructured or structured",
            &["unstructured", "structured"],
            "unstructured",
        ),
        VariantDecl::switch("alquimia", "Enable alquimia support", false),
        VariantDecl::switch("hypre", "Enable Hypre solver support", true),
        VariantDecl::switch("ats", "Enable ATS support", false),
        VariantDecl::switch("AmanziPhysics", "Enable Amanzi Physics support", false),
        VariantDecl::switch("ATSPhysics", "Enable ATS Physics support", false),
        VariantDecl::switch("crunchtope", "Enable CrunchTope support", false),
        VariantDecl::switch(
            "mstk",
            "Enable MSTK mesh support for unstructured mesh",
            true,
        ),
    ];

    recipe.patches = vec![
        PatchDecl::new(
            "exprtk.patch",
            VersionSelector::Exact(ReleaseVersion::new("master")),
        ),
        PatchDecl::new(
            "exprtk.patch",
            VersionSelector::AtLeast(ReleaseVersion::new("1.0.0")),
        ),
    ];

    recipe.dependencies = vec![
        DependencyDecl::new("git").with_kind(DependencyKind::Build),
        DependencyDecl::new("cmake")
            .with_constraint("@3.15:")
            .with_kind(DependencyKind::Build),
        // Mandatory
        DependencyDecl::new("mpi"),
        DependencyDecl::new("zlib"),
        DependencyDecl::new("metis"),
        DependencyDecl::new("parmetis"),
        DependencyDecl::new("seacas"),
        DependencyDecl::new("boost").with_constraint("@1.59.0: cxxstd=11 +program_options"),
        DependencyDecl::new("xerces-c"),
        DependencyDecl::new("cgns").with_constraint("@develop +mpi"),
        DependencyDecl::new("ascemio"),
        DependencyDecl::new("netcdf-c").with_constraint("+parallel-netcdf"),
        DependencyDecl::new("unittest-cpp"),
        // Alquimia
        DependencyDecl::new("petsc")
            .with_constraint("@3.10.2")
            .with_guard(Predicate::enabled("alquimia")),
        DependencyDecl::new("hdf5")
            .with_constraint("@1.10.6 +mpi+fortran+hl")
            .with_guard(Predicate::enabled("alquimia")),
        DependencyDecl::new("alquimia")
            .with_constraint("@xsdk-0.4.0")
            .with_guard(Predicate::enabled("alquimia")),
        DependencyDecl::new("pflotran")
            .with_constraint("@xsdk-0.4.0")
            .with_guard(Predicate::enabled("alquimia")),
        // Hypre
        DependencyDecl::new("superlu").with_guard(Predicate::enabled("hypre")),
        DependencyDecl::new("superlu-dist")
            .with_constraint("@5.4.0")
            .with_guard(Predicate::enabled("hypre")),
        DependencyDecl::new("hypre")
            .with_constraint("@2.22.1 +mpi")
            .with_guard(Predicate::enabled("hypre")),
        // MSTK
        DependencyDecl::new("mstk")
            .with_constraint("@3.3.5 partitioner=all +exodusii +parallel")
            .with_guard(Predicate::enabled("mstk")),
        DependencyDecl::new("nanoflann").with_guard(Predicate::enabled("mstk")),
        // Other
        DependencyDecl::new("crunchtope").with_guard(Predicate::enabled("crunchtope")),
        DependencyDecl::new("trilinos")
            .with_constraint("@13.0.0 +boost +hdf5 +anasazi +amesos2 +epetra +ml +zoltan +nox +ifpack +muelu")
            .with_guard(Predicate::enabled("eptra")),
    ];

    recipe.conflicts = vec![ConflictRule::new(
        Predicate::enabled("crunchtope"),
        Predicate::disabled("alquimia"),
        "+crunchtope needs +alquimia",
    )];

    recipe.options = cmake_decisions();
    recipe
}

/// The ordered CMake decision table
///
/// Row order is load-bearing: the generated flag list must come out the
/// same way every time, and the build system resolves duplicate flags by
/// taking the later one.
fn cmake_decisions() -> Vec<OptionDecision> {
    vec![
        OptionDecision::always("build-type").then(&["-DCMAKE_BUILD_TYPE=debug"]),
        OptionDecision::always("compilers").then(&[
            "-DCMAKE_C_COMPILER=%(cc)s",
            "-DCMAKE_CXX_COMPILER=%(cxx)s",
            "-DCMAKE_Fortran_COMPILER=%(fc)s",
        ]),
        OptionDecision::always("xerces").then(&["-DXERCES_LIBRARY_DIR=%(prefix:xerces-c)s/lib"]),
        OptionDecision::always("trilinos")
            .then(&["-DTrilinos_INSTALL_PREFIX:PATH=%(prefix:trilinos)s"]),
        // Not supported or always off/on
        OptionDecision::always("fixed").then(&["-DENABLE_OpenMP=OFF", "-DENABLE_SPACK_BUILD=ON"]),
        OptionDecision::new("alquimia", Predicate::enabled("alquimia"))
            .then(&[
                "-DENABLE_ALQUIMIA=ON",
                "-DENABLE_PETSC=ON",
                "-DENABLE_PFLOTRAN=ON",
                "-DPFLOTRAN_LIBRARY_DIR=%(prefix:pflotran)s/lib",
                "-DALQUIMIA_DIR=%(prefix:alquimia)s",
            ])
            .otherwise(&[
                "-DENABLE_ALQUIMIA=OFF",
                "-DENABLE_PETSC=OFF",
                "-DENABLE_PFLOTRAN=OFF",
            ]),
        OptionDecision::new("crunchtope", Predicate::enabled("crunchtope"))
            .then(&[
                "-DENABLE_CRUNCHTOPE=ON",
                "-DCRUNCHTOPE_DIR=%(prefix:crunchtope)s",
            ])
            .otherwise(&["-DENABLE_CRUNCHTOPE=OFF"]),
        OptionDecision::new("amanzi-physics", Predicate::enabled("AmanziPhysics"))
            .then(&["-DENABLE_AmanziPhysicsModule=ON"])
            .otherwise(&["-DENABLE_AmanziPhysicsModule=OFF"]),
        OptionDecision::new("ats-physics", Predicate::enabled("ATSPhysics"))
            .then(&["-DENABLE_ATSPhysicsModule=ON"])
            .otherwise(&["-DENABLE_ATSPhysicsModule=OFF"]),
        // The unit test suite is wired on unconditionally
        OptionDecision::always("tests").then(&["-DENABLE_TESTS=ON", "-DENABLE_UnitTest=ON"]),
        OptionDecision::new("mstk", Predicate::enabled("mstk"))
            .then(&[
                "-DMSTK_VERSION=3.3.5",
                "-DENABLE_MSTK_Mesh=ON",
                "-DENABLE_MESH_MSTK:BOOL=ON",
            ])
            .otherwise(&["-DENABLE_MSTK_Mesh=OFF"]),
        OptionDecision::new(
            "mesh-unstructured",
            Predicate::equals("mesh_type", "unstructured"),
        )
        .then(&["-DENABLE_Unstructured=ON", "-DENABLE_STK_Mesh=OFF"])
        .otherwise(&["-DENABLE_Unstructured=OFF"]),
        OptionDecision::new(
            "mesh-structured",
            Predicate::equals("mesh_type", "structured"),
        )
        .then(&["-DENABLE_Structured=ON"])
        .otherwise(&["-DENABLE_Structured=OFF"]),
        // ascemio is a hard dependency, so the OFF arm never fires
        OptionDecision::always("ascemio")
            .then(&["-DENABLE_ASCEMIO=ON"])
            .otherwise(&["-DENABLE_ASCEMIO=OFF"]),
        OptionDecision::new("hypre", Predicate::enabled("hypre"))
            .then(&["-DENABLE_SUPERLU=ON", "-DENABLE_HYPRE=ON"])
            .otherwise(&["-DENABLE_SUPERLU=OFF", "-DENABLE_HYPRE=OFF"]),
        OptionDecision::always("clm").then(&["-DENABLE_CLM=OFF"]),
        OptionDecision::always("dbc").then(&["-DENABLE_DBC=ON"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{BuildContext, Toolchain, VariantRequest, VariantValue};

    fn full_context() -> BuildContext {
        BuildContext::new()
            .with_toolchain(Toolchain::new("mpicc", "mpicxx", "mpifort"))
            .with_prefix("xerces-c", "/spack/xerces-c")
            .with_prefix("trilinos", "/spack/trilinos")
            .with_prefix("pflotran", "/spack/pflotran")
            .with_prefix("alquimia", "/spack/alquimia")
            .with_prefix("crunchtope", "/spack/crunchtope")
    }

    #[test]
    fn test_recipe_shape() {
        let r = amanzi();
        assert_eq!(r.name, "amanzi");
        assert_eq!(r.releases.len(), 3);
        assert_eq!(r.variants.len(), 10);
        assert_eq!(r.dependencies.len(), 24);
        assert_eq!(r.conflicts.len(), 1);
    }

    #[test]
    fn test_default_release_is_master() {
        let r = amanzi();
        let master = r.default_release().unwrap();
        assert_eq!(master.label, "master");
        assert!(master.submodules);
    }

    #[test]
    fn test_default_assignment() {
        let r = amanzi();
        let assignment = r.resolve(&[]).unwrap();
        assert!(assignment.is_enabled("eptra"));
        assert!(assignment.is_enabled("hypre"));
        assert!(assignment.is_enabled("mstk"));
        assert!(!assignment.is_enabled("alquimia"));
        assert!(!assignment.is_enabled("crunchtope"));
        assert_eq!(
            assignment.value_of("mesh_type").map(|v| v.to_string()),
            Some("unstructured".to_string())
        );
    }

    #[test]
    fn test_default_dependency_set() {
        let r = amanzi();
        let assignment = r.resolve(&[]).unwrap();
        let deps = r.dependencies_for(&assignment);
        // 13 unguarded + hypre (3) + mstk (2) + eptra trilinos (1)
        assert_eq!(deps.len(), 19);
        assert!(deps.iter().any(|d| d.package == "trilinos"));
        assert!(!deps.iter().any(|d| d.package == "petsc"));
    }

    #[test]
    fn test_alquimia_pulls_geochemistry_stack() {
        let r = amanzi();
        let assignment = r
            .resolve(&VariantRequest::parse_list("+alquimia").unwrap())
            .unwrap();
        let deps = r.dependencies_for(&assignment);
        for package in ["petsc", "hdf5", "alquimia", "pflotran"] {
            assert!(deps.iter().any(|d| d.package == package), "missing {}", package);
        }
    }

    #[test]
    fn test_crunchtope_requires_alquimia() {
        let r = amanzi();
        let err = r
            .resolve(&VariantRequest::parse_list("+crunchtope").unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("+crunchtope needs +alquimia"));

        assert!(
            r.resolve(&VariantRequest::parse_list("+crunchtope +alquimia").unwrap())
                .is_ok()
        );
    }

    #[test]
    fn test_default_flags_properties() {
        let r = amanzi();
        let assignment = r.resolve(&[]).unwrap();
        let flags = r.cmake_args(&assignment, &full_context()).unwrap();

        for expected in [
            "-DENABLE_ALQUIMIA=OFF",
            "-DENABLE_MSTK_Mesh=ON",
            "-DENABLE_Unstructured=ON",
            "-DENABLE_Structured=OFF",
            "-DENABLE_HYPRE=ON",
            "-DENABLE_ASCEMIO=ON",
        ] {
            assert!(flags.iter().any(|f| f == expected), "missing {}", expected);
        }

        // The geochemistry path flags stay out entirely
        assert!(!flags.iter().any(|f| f.starts_with("-DPFLOTRAN_LIBRARY_DIR=")));
        assert!(!flags.iter().any(|f| f.starts_with("-DALQUIMIA_DIR=")));
    }

    #[test]
    fn test_structured_mesh_flags() {
        let r = amanzi();
        let assignment = r
            .resolve(&VariantRequest::parse_list("mesh_type=structured").unwrap())
            .unwrap();
        let flags = r.cmake_args(&assignment, &full_context()).unwrap();
        assert!(flags.iter().any(|f| f == "-DENABLE_Unstructured=OFF"));
        assert!(flags.iter().any(|f| f == "-DENABLE_Structured=ON"));
        assert!(!flags.iter().any(|f| f == "-DENABLE_STK_Mesh=OFF"));
    }

    #[test]
    fn test_bypassed_mesh_domain_disables_both_mesh_frameworks() {
        // resolve() rejects mesh values outside the declared choices, so
        // this state is only reachable by editing the assignment directly.
        // Derivation still has a defined answer: neither framework is on.
        let r = amanzi();
        let mut assignment = r.resolve(&[]).unwrap();
        assignment.set("mesh_type", VariantValue::Choice("hybrid".to_string()));
        let flags = r.cmake_args(&assignment, &full_context()).unwrap();
        assert!(flags.iter().any(|f| f == "-DENABLE_Unstructured=OFF"));
        assert!(flags.iter().any(|f| f == "-DENABLE_Structured=OFF"));
        assert!(!flags.iter().any(|f| f == "-DENABLE_Unstructured=ON"));
        assert!(!flags.iter().any(|f| f == "-DENABLE_Structured=ON"));
    }

    #[test]
    fn test_exprtk_patch_applies_everywhere() {
        let r = amanzi();
        assert_eq!(r.patches_for("master"), vec!["exprtk.patch"]);
        assert_eq!(r.patches_for("1.0.0"), vec!["exprtk.patch"]);
        assert_eq!(r.patches_for("1.1-dev"), vec!["exprtk.patch"]);
    }
}
