// tests/amanzi_recipe.rs

//! End-to-end tests of the built-in Amanzi recipe: variant resolution,
//! dependency selection, flag derivation, and the on-disk round trip.

use amanzi_forge::recipe::{
    amanzi, parse_recipe_file, validate_recipe, BuildContext, DependencyKind, RecipeFile,
    Toolchain, VariantRequest,
};

/// Toolchain plus the prefixes every default build substitutes from.
fn default_context() -> BuildContext {
    BuildContext::new()
        .with_toolchain(Toolchain::new("mpicc", "mpicxx", "mpifort"))
        .with_prefix("xerces-c", "/spack/xerces-c")
        .with_prefix("trilinos", "/spack/trilinos")
}

#[test]
fn test_builtin_recipe_validates_clean() {
    let recipe = amanzi();
    let warnings = validate_recipe(&recipe).unwrap();
    assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
}

#[test]
fn test_default_build_flag_list() {
    let recipe = amanzi();
    let assignment = recipe.resolve(&[]).unwrap();
    let flags = recipe.cmake_args(&assignment, &default_context()).unwrap();

    assert_eq!(
        flags,
        vec![
            "-DCMAKE_BUILD_TYPE=debug",
            "-DCMAKE_C_COMPILER=mpicc",
            "-DCMAKE_CXX_COMPILER=mpicxx",
            "-DCMAKE_Fortran_COMPILER=mpifort",
            "-DXERCES_LIBRARY_DIR=/spack/xerces-c/lib",
            "-DTrilinos_INSTALL_PREFIX:PATH=/spack/trilinos",
            "-DENABLE_OpenMP=OFF",
            "-DENABLE_SPACK_BUILD=ON",
            "-DENABLE_ALQUIMIA=OFF",
            "-DENABLE_PETSC=OFF",
            "-DENABLE_PFLOTRAN=OFF",
            "-DENABLE_CRUNCHTOPE=OFF",
            "-DENABLE_AmanziPhysicsModule=OFF",
            "-DENABLE_ATSPhysicsModule=OFF",
            "-DENABLE_TESTS=ON",
            "-DENABLE_UnitTest=ON",
            "-DMSTK_VERSION=3.3.5",
            "-DENABLE_MSTK_Mesh=ON",
            "-DENABLE_MESH_MSTK:BOOL=ON",
            "-DENABLE_Unstructured=ON",
            "-DENABLE_STK_Mesh=OFF",
            "-DENABLE_Structured=OFF",
            "-DENABLE_ASCEMIO=ON",
            "-DENABLE_SUPERLU=ON",
            "-DENABLE_HYPRE=ON",
            "-DENABLE_CLM=OFF",
            "-DENABLE_DBC=ON",
        ]
    );
}

#[test]
fn test_flag_derivation_is_reproducible() {
    let recipe = amanzi();
    let assignment = recipe.resolve(&[]).unwrap();
    let ctx = default_context();

    let first = recipe.cmake_args(&assignment, &ctx).unwrap();
    let second = recipe.cmake_args(&assignment, &ctx).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_geochemistry_build() {
    let recipe = amanzi();
    let requests = VariantRequest::parse_list("+alquimia +crunchtope").unwrap();
    let assignment = recipe.resolve(&requests).unwrap();

    // The default context has no geochemistry prefixes resolved
    assert!(recipe.cmake_args(&assignment, &default_context()).is_err());

    let ctx = default_context()
        .with_prefix("pflotran", "/spack/pflotran")
        .with_prefix("alquimia", "/spack/alquimia")
        .with_prefix("crunchtope", "/spack/crunchtope");
    let flags = recipe.cmake_args(&assignment, &ctx).unwrap();

    assert!(flags.iter().any(|f| f == "-DENABLE_ALQUIMIA=ON"));
    assert!(
        flags
            .iter()
            .any(|f| f == "-DPFLOTRAN_LIBRARY_DIR=/spack/pflotran/lib")
    );
    assert!(flags.iter().any(|f| f == "-DCRUNCHTOPE_DIR=/spack/crunchtope"));

    let deps = recipe.dependencies_for(&assignment);
    for package in ["petsc", "hdf5", "alquimia", "pflotran", "crunchtope"] {
        assert!(
            deps.iter().any(|d| d.package == package),
            "missing {}",
            package
        );
    }
}

#[test]
fn test_crunchtope_alone_is_rejected() {
    let recipe = amanzi();
    let requests = VariantRequest::parse_list("+crunchtope").unwrap();
    let err = recipe.resolve(&requests).unwrap_err();
    assert!(err.to_string().contains("+crunchtope needs +alquimia"));
}

#[test]
fn test_unknown_variant_request_is_rejected() {
    let recipe = amanzi();
    let requests = VariantRequest::parse_list("+petsc4py").unwrap();
    assert!(recipe.resolve(&requests).is_err());
}

#[test]
fn test_build_time_dependencies() {
    let recipe = amanzi();
    let assignment = recipe.resolve(&[]).unwrap();
    let build: Vec<&str> = recipe
        .dependencies_for(&assignment)
        .into_iter()
        .filter(|d| d.kind == DependencyKind::Build)
        .map(|d| d.package.as_str())
        .collect();
    assert_eq!(build, vec!["git", "cmake"]);
}

#[test]
fn test_recipe_survives_the_disk_round_trip() {
    let original = amanzi();
    let serialized = toml::to_string_pretty(&RecipeFile::from_recipe(&original)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("amanzi.toml");
    std::fs::write(&path, serialized).unwrap();

    let reloaded = parse_recipe_file(&path).unwrap();
    assert_eq!(reloaded.name, original.name);
    assert_eq!(reloaded.releases.len(), original.releases.len());
    assert_eq!(reloaded.variants.len(), original.variants.len());
    assert_eq!(reloaded.dependencies.len(), original.dependencies.len());
    assert_eq!(reloaded.conflicts.len(), original.conflicts.len());
    assert_eq!(reloaded.patches.len(), original.patches.len());
    assert_eq!(reloaded.options.len(), original.options.len());

    // Both sides must make the same default decisions
    let ctx = default_context();
    let original_flags = original
        .cmake_args(&original.resolve(&[]).unwrap(), &ctx)
        .unwrap();
    let reloaded_flags = reloaded
        .cmake_args(&reloaded.resolve(&[]).unwrap(), &ctx)
        .unwrap();
    assert_eq!(original_flags, reloaded_flags);
}
